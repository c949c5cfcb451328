//! `PcStore`: component catalog for assembling a desktop PC.
//!
//! Six categories, weighted by their contribution to overall performance.
//! Prices are in reais; raw performance is a 0..=100 rating per part.

use costwise_kernel::model::{ConfigSpace, ModelError};

use crate::contract::ConfigWorldV1;

pub struct PcStore;

/// Budget used by the reference run.
pub const DEFAULT_BUDGET: f64 = 8000.0;

type CatalogEntry = (&'static str, f64, u32);

const CATALOG: [(&str, f64, &[CatalogEntry]); 6] = [
    (
        "CPU",
        0.30,
        &[
            ("Ryzen 5 5600G", 850.0, 80),
            ("Intel i5 10400F", 750.0, 75),
            ("Ryzen 7 5800X", 1300.0, 95),
            ("Intel i7 11700K", 1400.0, 92),
            ("Athlon 3000G", 350.0, 40),
        ],
    ),
    (
        "GPU",
        0.35,
        &[
            ("RTX 3060", 1900.0, 90),
            ("GTX 1660 Super", 1200.0, 70),
            ("RX 6600", 1500.0, 80),
            ("GT 1030", 500.0, 30),
        ],
    ),
    (
        "RAM",
        0.15,
        &[
            ("8GB DDR4 2666MHz", 150.0, 40),
            ("16GB DDR4 3200MHz", 300.0, 75),
            ("32GB DDR4 3600MHz", 550.0, 90),
            ("4GB DDR4 2133MHz", 80.0, 20),
        ],
    ),
    (
        "Storage",
        0.10,
        &[
            ("SSD 480GB", 200.0, 80),
            ("HD 1TB 7200RPM", 250.0, 50),
            ("SSD NVMe 1TB", 600.0, 95),
        ],
    ),
    (
        "Motherboard",
        0.05,
        &[
            ("B450M Gigabyte", 450.0, 60),
            ("B660M Asus", 700.0, 80),
            ("A320M Biostar", 300.0, 40),
        ],
    ),
    (
        "PSU",
        0.05,
        &[
            ("Fonte 500W", 250.0, 60),
            ("Fonte 600W 80+ Bronze", 400.0, 85),
            ("Fonte 400W", 180.0, 40),
        ],
    ),
];

impl ConfigWorldV1 for PcStore {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "pc_store"
    }

    fn space(&self) -> Result<ConfigSpace, ModelError> {
        let mut builder = ConfigSpace::builder();
        for (name, weight, items) in CATALOG {
            let category = builder.add_category(name, weight)?;
            for &(item, cost, performance) in items {
                builder.add_item(category, item, cost, performance)?;
            }
        }
        builder.build()
    }

    fn default_budget(&self) -> f64 {
        DEFAULT_BUDGET
    }
}
