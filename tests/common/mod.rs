//! Shared test utilities for the integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use rackstore::*;

// ============================================================================
// TestRepo - a repository root in a temp directory
// ============================================================================

/// Temp repository root with helpers to seed and inspect collection files
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        TestRepo {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` under the root
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `contents` at `rel`, creating parent directories
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read collection file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Write every canonical fixture below
    pub fn seed_all(&self) {
        for (rel, contents) in CANONICAL_FIXTURES {
            self.write(rel, contents);
        }
    }

    pub fn master(&self) -> MasterDataService {
        MasterDataService::from_root(self.root())
    }

    pub fn movements(&self) -> MovementDataService {
        MovementDataService::from_root(self.root())
    }

    pub fn indexes(&self) -> IndexDataService {
        IndexDataService::from_root(self.root())
    }
}

// ============================================================================
// Canonical fixtures
// ============================================================================
//
// Each file is exactly what a save of its own load produces: 2-space
// indent, keys in wire order, optionals only when set, trailing newline.

pub const RACKS: &str = r#"[
  {
    "id": "rack-1",
    "name": "Main Rack",
    "wledInstance": "wled-main",
    "rows": 4,
    "drawersPerRow": 6
  }
]
"#;

pub const DRAWERS: &str = r#"[
  {
    "id": "drawer-a",
    "rackId": "rack-1",
    "row": 0,
    "col": 0,
    "label": "A1",
    "pixelRange": {
      "start": 0,
      "count": 3
    }
  },
  {
    "id": "drawer-b",
    "rackId": "rack-1",
    "row": 0,
    "col": 1,
    "label": "A2",
    "pixelRange": {
      "start": 3,
      "count": 3
    }
  }
]
"#;

pub const PARTS: &str = r#"[
  {
    "id": "part-1",
    "name": "Resistor 1k",
    "categoryId": "cat-res",
    "manufacturerId": "mfg-1",
    "drawerId": "drawer-a",
    "tags": [
      "resistor",
      "through-hole"
    ],
    "quantity": 100,
    "notes": "Standard carbon film"
  },
  {
    "id": "part-2",
    "name": "Capacitor 10µF",
    "categoryId": "cat-cap",
    "manufacturerId": "mfg-2",
    "drawerId": "drawer-b",
    "tags": [
      "capacitor"
    ],
    "quantity": 25,
    "images": [
      "images/part-2.jpg"
    ]
  },
  {
    "id": "part-3",
    "name": "Resistor 10k",
    "categoryId": "cat-res",
    "manufacturerId": "mfg-1",
    "drawerId": "drawer-a",
    "tags": [
      "resistor",
      "smd"
    ],
    "quantity": 5
  }
]
"#;

pub const CATEGORIES: &str = r#"[
  {
    "id": "cat-res",
    "name": "Resistors"
  },
  {
    "id": "cat-cap",
    "name": "Capacitors"
  }
]
"#;

pub const MANUFACTURERS: &str = r#"[
  {
    "id": "mfg-1",
    "name": "Yageo"
  }
]
"#;

pub const TAGS: &str = r#"[
  {
    "id": "resistor",
    "name": "Resistor"
  },
  {
    "id": "smd",
    "name": "SMD"
  }
]
"#;

pub const LOCATIONS: &str = r#"[
  {
    "id": "loc-1",
    "name": "Werkbank",
    "description": "Über dem Lötplatz"
  },
  {
    "id": "loc-2",
    "name": "Shelf"
  }
]
"#;

pub const STOCK_MOVEMENTS_202401: &str = r#"[
  {
    "id": "mov-1",
    "partId": "part-1",
    "type": "in",
    "qty": 100,
    "timestamp": "2024-01-05T10:00:00Z",
    "note": "Initial stock"
  },
  {
    "id": "mov-2",
    "partId": "part-1",
    "type": "out",
    "qty": 4,
    "timestamp": "2024-01-09T16:30:00Z"
  }
]
"#;

pub const ADJUSTMENTS_202401: &str = r#"[
  {
    "id": "adj-1",
    "partId": "part-3",
    "delta": -2,
    "timestamp": "2024-01-20T08:00:00Z",
    "reason": "Count correction"
  }
]
"#;

pub const RESERVATIONS: &str = r#"[
  {
    "id": "res-1",
    "partId": "part-2",
    "qty": 10,
    "status": "open",
    "timestamp": "2024-01-11T12:00:00Z"
  }
]
"#;

pub const PARTS_BY_TAG: &str = r#"[
  {
    "tagId": "resistor",
    "partIds": [
      "part-1",
      "part-3"
    ]
  }
]
"#;

pub const PARTS_BY_CATEGORY: &str = r#"[
  {
    "categoryId": "cat-res",
    "partIds": [
      "part-1",
      "part-3"
    ]
  },
  {
    "categoryId": "cat-cap",
    "partIds": [
      "part-2"
    ]
  }
]
"#;

pub const PARTS_BY_DRAWER: &str = r#"[
  {
    "drawerId": "drawer-a",
    "partIds": []
  }
]
"#;

pub const CANONICAL_FIXTURES: [(&str, &str); 13] = [
    ("data/master/racks.json", RACKS),
    ("data/master/drawers.json", DRAWERS),
    ("data/master/parts.json", PARTS),
    ("data/master/categories.json", CATEGORIES),
    ("data/master/manufacturers.json", MANUFACTURERS),
    ("data/master/tags.json", TAGS),
    ("data/master/locations.json", LOCATIONS),
    ("data/movements/stock_movements_202401.json", STOCK_MOVEMENTS_202401),
    ("data/movements/adjustments_202401.json", ADJUSTMENTS_202401),
    ("data/movements/reservations.json", RESERVATIONS),
    ("data/indexes/parts_by_tag.json", PARTS_BY_TAG),
    ("data/indexes/parts_by_category.json", PARTS_BY_CATEGORY),
    ("data/indexes/parts_by_drawer.json", PARTS_BY_DRAWER),
];

// ============================================================================
// Record builders
// ============================================================================

pub fn part(id: &str, quantity: i64) -> Part {
    Part::new(id, id, "cat-res", "mfg-1", "drawer-a", vec![], quantity)
}

pub fn stock_movement(id: &str, qty: i64) -> StockMovement {
    StockMovement {
        id: id.to_string(),
        part_id: "part-1".to_string(),
        movement_type: "in".to_string(),
        qty,
        timestamp: "2024-02-01T09:00:00Z".to_string(),
        note: None,
    }
}

pub fn ids<R: Record>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.key().to_string()).collect()
}
