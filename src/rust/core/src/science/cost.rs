// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

use crate::tensors::{Material, MixDesign};

/// Unit prices, currency per kg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTable {
    pub cement: f64,
    pub slag: f64,
    pub fly_ash: f64,
    pub water: f64,
    pub superplasticizer: f64,
    pub coarse_aggregate: f64,
    pub fine_aggregate: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            cement: 2.5,
            slag: 1.5,
            fly_ash: 1.0,
            water: 0.015,
            superplasticizer: 40.0,
            coarse_aggregate: 0.35,
            fine_aggregate: 0.30,
        }
    }
}

impl PriceTable {
    pub fn price(&self, material: Material) -> f64 {
        match material {
            Material::Cement => self.cement,
            Material::Slag => self.slag,
            Material::FlyAsh => self.fly_ash,
            Material::Water => self.water,
            Material::Superplasticizer => self.superplasticizer,
            Material::CoarseAggregate => self.coarse_aggregate,
            Material::FineAggregate => self.fine_aggregate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub material: Material,
    pub label: String,
    pub quantity: f64,   // kg/m³
    pub unit_price: f64, // per kg
    pub cost: f64,       // per m³
    /// Contributes nothing; proportional displays should skip it.
    pub zero_cost: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// One entry per material, in feature order.
    pub items: Vec<CostItem>,
    pub total_cost_per_cubic_meter: f64,
}

impl CostBreakdown {
    pub fn item(&self, material: Material) -> Option<&CostItem> {
        self.items.iter().find(|i| i.material == material)
    }

    /// Items that carry a non-zero cost, for pie / donut displays.
    pub fn proportional_items(&self) -> impl Iterator<Item = &CostItem> {
        self.items.iter().filter(|i| !i.zero_cost)
    }

    /// Fraction of the total contributed by `material`, `None` when it costs nothing.
    pub fn share(&self, material: Material) -> Option<f64> {
        let item = self.item(material).filter(|i| !i.zero_cost)?;
        if self.total_cost_per_cubic_meter > 0.0 {
            Some(item.cost / self.total_cost_per_cubic_meter)
        } else {
            None
        }
    }

    /// Largest single contributor; the first one wins a tie.
    pub fn dominant(&self) -> Option<&CostItem> {
        self.proportional_items().fold(None, |best: Option<&CostItem>, item| match best {
            Some(b) if b.cost >= item.cost => Some(b),
            _ => Some(item),
        })
    }
}

/// Quantity x unit price per material, summed.
pub fn estimate_cost(mix: &MixDesign, prices: &PriceTable) -> CostBreakdown {
    let items: Vec<CostItem> = Material::ALL
        .iter()
        .map(|&material| {
            let quantity = mix.quantity(material);
            let unit_price = prices.price(material);
            let cost = quantity * unit_price;
            CostItem {
                material,
                label: material.label().to_string(),
                quantity,
                unit_price,
                cost,
                zero_cost: cost <= 0.0,
            }
        })
        .collect();

    let total_cost_per_cubic_meter = items.iter().map(|i| i.cost).sum();

    CostBreakdown {
        items,
        total_cost_per_cubic_meter,
    }
}
