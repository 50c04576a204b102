//! Product catalog shown in the preview: finish swatches for the arms
//! and legs accordions. Fixed data, not part of the settings document.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finish {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishCategory {
    pub name: &'static str,
    pub finishes: &'static [Finish],
}

static LEATHER: [Finish; 10] = [
    Finish { name: "Charcoal Brown", hex: "#58504A" },
    Finish { name: "Olive Green", hex: "#5C6B52" },
    Finish { name: "Forest Green", hex: "#4F6456" },
    Finish { name: "Sage Green", hex: "#637662" },
    Finish { name: "Slate Gray", hex: "#615D67" },
    Finish { name: "Dusty Purple", hex: "#7D6D7E" },
    Finish { name: "Steel Blue", hex: "#4D6073" },
    Finish { name: "Burgundy Red", hex: "#A1545C" },
    Finish { name: "Deep Wine", hex: "#6B3E3E" },
    Finish { name: "Teal Green", hex: "#4A7065" },
];

static SILICONE: [Finish; 5] = [
    Finish { name: "Charcoal Brown", hex: "#58504A" },
    Finish { name: "Olive Green", hex: "#5C6B52" },
    Finish { name: "Forest Green", hex: "#4F6456" },
    Finish { name: "Sage Green", hex: "#637662" },
    Finish { name: "Slate Gray", hex: "#615D67" },
];

static ALUMINUM: [Finish; 1] = [Finish { name: "Silver", hex: "#C0C0C0" }];

static STEEL: [Finish; 4] = [
    Finish { name: "Polished Steel", hex: "#C0C0C0" },
    Finish { name: "Brushed Steel", hex: "#A8A8A8" },
    Finish { name: "Black Steel", hex: "#2C2C2C" },
    Finish { name: "Gold Steel", hex: "#D4AF37" },
];

static WOOD: [Finish; 4] = [
    Finish { name: "Oak", hex: "#D2B48C" },
    Finish { name: "Walnut", hex: "#5C4033" },
    Finish { name: "Mahogany", hex: "#C04000" },
    Finish { name: "Birch", hex: "#F5E6D3" },
];

/// Finish choices for the arms accordion, tabbed by category.
pub static ARM_FINISH_CATEGORIES: [FinishCategory; 3] = [
    FinishCategory { name: "LEATHER", finishes: &LEATHER },
    FinishCategory { name: "SILICONE", finishes: &SILICONE },
    FinishCategory { name: "ALUMINUM", finishes: &ALUMINUM },
];

/// Finish choices for the legs accordion.
pub static LEG_FINISH_CATEGORIES: [FinishCategory; 2] = [
    FinishCategory { name: "Steel", finishes: &STEEL },
    FinishCategory { name: "Wood", finishes: &WOOD },
];
