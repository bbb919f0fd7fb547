//! Asset catalog: searchable device records with calibration tracking.

use std::collections::VecDeque;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{DUE_SOON_DAYS, RECENT_LIMIT};

/// Calibration state of an asset relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationStatus {
    /// Due date has passed.
    Overdue,
    /// Due within the next week (inclusive).
    DueSoon,
    /// More than a week of margin remaining.
    Current,
}

/// A tracked piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Human-readable device description.
    pub description: String,
    /// Part number ("PN-12345").
    pub part_number: String,
    /// Serial number ("SN-123456").
    pub serial_number: String,
    /// Date of the most recent calibration.
    pub last_calibration: NaiveDate,
    /// Date the next calibration is due.
    pub calibration_due: NaiveDate,
}

impl Asset {
    /// Classify the calibration state as of `today`.
    pub fn calibration_status(&self, today: NaiveDate) -> CalibrationStatus {
        let days_left = (self.calibration_due - today).num_days();
        if days_left < 0 {
            CalibrationStatus::Overdue
        } else if days_left <= DUE_SOON_DAYS {
            CalibrationStatus::DueSoon
        } else {
            CalibrationStatus::Current
        }
    }
}

/// In-memory asset collection with search and a recently-viewed list.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
    /// Indices into `assets`, most recent first.
    recently_viewed: VecDeque<usize>,
}

const DEVICE_TYPES: &[&str] = &[
    "iPhone 13",
    "Samsung Galaxy S22",
    "LG Velvet",
    "Huawei P50",
    "Raspberry Pi 4",
    "Google Pixel 6",
    "MacBook Pro",
    "Dell XPS 13",
];

impl AssetCatalog {
    /// Create a catalog from a fixed asset list.
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            recently_viewed: VecDeque::new(),
        }
    }

    /// Build a synthetic catalog for demos and tests.
    ///
    /// Each asset gets a device type drawn from a fixed list, a random
    /// `PN-xxxxx` part number, a last-calibration date up to 30 days in the
    /// past, and a due date 30 days after that.
    pub fn sample(count: usize, today: NaiveDate, rng: &mut impl Rng) -> Self {
        let mut assets = Vec::with_capacity(count);
        for _ in 0..count {
            let description = DEVICE_TYPES[rng.gen_range(0..DEVICE_TYPES.len())].to_string();
            let part_number = format!("PN-{}", rng.gen_range(10000..=99999));
            let serial_number = format!("SN-{}", rng.gen_range(100000..=999999));
            let last_calibration = today - Duration::days(rng.gen_range(0..=30));
            let calibration_due = last_calibration + Duration::days(30);
            assets.push(Asset {
                description,
                part_number,
                serial_number,
                last_calibration,
                calibration_due,
            });
        }
        Self::new(assets)
    }

    /// All assets, in catalog order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Number of assets in the catalog.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Case-insensitive substring search over description and part number.
    ///
    /// An empty (or whitespace-only) query yields no results; the search
    /// surface treats a cleared query as "show nothing", not "show all".
    pub fn search(&self, query: &str) -> Vec<(usize, &Asset)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.assets
            .iter()
            .enumerate()
            .filter(|(_, asset)| {
                asset.description.to_lowercase().contains(&query)
                    || asset.part_number.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Record that the asset at `index` was viewed.
    ///
    /// Moves an already-listed asset to the front instead of duplicating it,
    /// and caps the list at the configured limit. Out-of-range indices are
    /// ignored.
    pub fn mark_viewed(&mut self, index: usize) {
        if index >= self.assets.len() {
            return;
        }
        if let Some(pos) = self.recently_viewed.iter().position(|&i| i == index) {
            self.recently_viewed.remove(pos);
        }
        self.recently_viewed.push_front(index);
        self.recently_viewed.truncate(RECENT_LIMIT);
    }

    /// Recently viewed assets, most recent first.
    pub fn recently_viewed(&self) -> Vec<&Asset> {
        self.recently_viewed
            .iter()
            .map(|&i| &self.assets[i])
            .collect()
    }
}
