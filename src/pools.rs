//! Static value tables the generator draws from.
//!
//! Every table has a `&'static` default and can be replaced from the YAML
//! config (`pools:` section), which is how tests shrink the address-label
//! pool or force a single brand.

use crate::model::ProductType;
use serde::{Deserialize, Serialize};

/// Nicknames for shipping addresses
const ADDRESS_LABELS: &[&str] = &[
    "Home",
    "Work",
    "Mom's House",
    "Dad's House",
    "Beach House",
    "Vacation Home",
    "Office",
    "P.O. Box",
    "Country Home",
    "Apartment",
    "Dorm Room",
    "Summer House",
    "In-Laws",
    "Cabin",
    "Lake House",
    "City Apartment",
    "Parent's House",
    "Rental Property",
    "Brother's Place",
    "Sister's Place",
    "Winter Home",
    "Mailbox Plus",
    "UPS Store",
    "Main Residence",
    "Second Home",
    "Business Address",
];

const BRANDS: &[&str] = &[
    "TechPro",
    "EliteBook",
    "NexGen",
    "InnovateTech",
    "Comptech",
    "FutureSys",
    "OmniComp",
    "PrimeWare",
    "DigitalEdge",
    "CoreTech",
    "AlphaSys",
    "CrystalView",
    "BlueChip",
    "MegaByte",
    "QuantumTech",
    "SilverStream",
    "VertexSys",
    "ByteForce",
    "TitanWare",
    "PulseTech",
    "NovaComp",
    "DataFlow",
    "MatrixPC",
    "UniTech",
];

const DESKTOP_CATEGORIES: &[&str] = &[
    "Gaming PC",
    "Office Workstation",
    "Design Station",
    "Compact Desktop",
    "All-in-One",
    "Mini PC",
    "Multimedia Desktop",
    "Business Desktop",
    "Home PC",
    "Professional Workstation",
];

const LAPTOP_CATEGORIES: &[&str] = &[
    "Gaming Laptop",
    "Ultrabook",
    "2-in-1 Convertible",
    "Business Laptop",
    "Student Laptop",
    "Professional Notebook",
    "Chromebook",
    "Graphics Workstation",
    "Budget Laptop",
    "Premium Laptop",
];

const PRINTER_CATEGORIES: &[&str] = &[
    "Color Laser",
    "Monochrome Laser",
    "Photo Printer",
    "All-in-One",
    "Document Scanner",
    "Label Printer",
    "Wide Format",
    "3D Printer",
    "Portable Printer",
    "Thermal Printer",
];

const ACCESSORY_CATEGORIES: &[&str] = &[
    "Wireless Mouse",
    "Mechanical Keyboard",
    "External Hard Drive",
    "USB Hub",
    "Webcam",
    "Monitor",
    "Headset",
    "Graphics Tablet",
    "Docking Station",
    "Speakers",
    "Surge Protector",
    "UPS Battery Backup",
    "Laptop Cooling Pad",
    "WiFi Extender",
];

/// Placeholder replaced with the product name in description templates
pub const NAME_PLACEHOLDER: &str = "{name}";

const DESKTOP_DESCRIPTIONS: &[&str] = &[
    "High-performance {name} with advanced cooling system for intensive tasks.",
    "Sleek and powerful {name} designed for professional environments.",
    "Compact yet powerful {name} that saves space without compromising performance.",
    "Ultimate gaming experience with the {name}, featuring customizable RGB lighting.",
    "Expandable {name} with multiple upgrade options for future-proofing your investment.",
];

const LAPTOP_DESCRIPTIONS: &[&str] = &[
    "Lightweight and portable {name} with all-day battery life.",
    "Premium {name} featuring a vivid display and immersive audio.",
    "Versatile {name} with touchscreen capabilities for enhanced productivity.",
    "Rugged {name} built to withstand demanding environments.",
    "Slim {name} with military-grade durability and biometric security features.",
];

const PRINTER_DESCRIPTIONS: &[&str] = &[
    "High-speed {name} with wireless connectivity for seamless printing.",
    "Efficient {name} with eco-friendly ink system that reduces waste.",
    "Versatile {name} that handles multiple paper sizes and types.",
    "Professional-grade {name} for stunning photo and document output.",
    "Compact {name} perfect for home offices with limited space.",
];

const ACCESSORY_DESCRIPTIONS: &[&str] = &[
    "Essential {name} designed for maximum comfort and productivity.",
    "Premium {name} with ergonomic design for extended use.",
    "High-performance {name} built for professionals and enthusiasts.",
    "Sleek and modern {name} that complements any workspace.",
    "Durable {name} with advanced features for everyday use.",
];

const PRIMARY_FEATURES: &[&str] = &[
    "fast connectivity",
    "customizable settings",
    "energy efficiency",
    "compact design",
    "noise reduction technology",
];

const SECONDARY_FEATURES: &[&str] = &[
    "premium materials",
    "intuitive controls",
    "automatic functionality",
    "extended warranty",
    "award-winning design",
];

const MODEL_PREFIXES: &[&str] = &["Pro", "Elite", "Max", "Ultra", "Slim", "Plus", "X", "S", "Z"];

const CPUS: &[&str] = &[
    "Intel i3",
    "Intel i5",
    "Intel i7",
    "Intel i9",
    "AMD Ryzen 5",
    "AMD Ryzen 7",
    "AMD Ryzen 9",
];

const PRINTER_MECHANISMS: &[&str] = &["Laser", "Inkjet", "All-in-One", "3D"];

const PRINTER_RESOLUTIONS: &[&str] = &["600x600", "1200x1200", "2400x1200", "4800x1200"];

const BATTERY_CHEMISTRIES: &[&str] = &["Lithium Ion", "Lithium Polymer", "Nickel Cadmium"];

const CARD_NETWORKS: &[&str] = &["Visa", "MasterCard", "American Express", "Discover"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One list per product type.
///
/// Overriding a `PerType` from YAML replaces all four lists; types left out
/// come back empty and fail validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerType {
    pub desktop: Vec<String>,
    pub laptop: Vec<String>,
    pub printer: Vec<String>,
    pub accessory: Vec<String>,
}

impl PerType {
    fn from_static(
        desktop: &[&str],
        laptop: &[&str],
        printer: &[&str],
        accessory: &[&str],
    ) -> Self {
        Self {
            desktop: owned(desktop),
            laptop: owned(laptop),
            printer: owned(printer),
            accessory: owned(accessory),
        }
    }

    pub fn get(&self, product_type: ProductType) -> &[String] {
        match product_type {
            ProductType::Desktop => &self.desktop,
            ProductType::Laptop => &self.laptop,
            ProductType::Printer => &self.printer,
            ProductType::Accessory => &self.accessory,
        }
    }
}

/// Named value pools used by the generation stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pools {
    pub address_labels: Vec<String>,
    pub brands: Vec<String>,
    pub categories: PerType,
    /// Templates containing `{name}`
    pub descriptions: PerType,
    pub primary_features: Vec<String>,
    pub secondary_features: Vec<String>,
    pub model_prefixes: Vec<String>,
    pub cpus: Vec<String>,
    pub printer_mechanisms: Vec<String>,
    pub printer_resolutions: Vec<String>,
    pub battery_chemistries: Vec<String>,
    pub card_networks: Vec<String>,
}

impl Default for Pools {
    fn default() -> Self {
        Self {
            address_labels: owned(ADDRESS_LABELS),
            brands: owned(BRANDS),
            categories: PerType::from_static(
                DESKTOP_CATEGORIES,
                LAPTOP_CATEGORIES,
                PRINTER_CATEGORIES,
                ACCESSORY_CATEGORIES,
            ),
            descriptions: PerType::from_static(
                DESKTOP_DESCRIPTIONS,
                LAPTOP_DESCRIPTIONS,
                PRINTER_DESCRIPTIONS,
                ACCESSORY_DESCRIPTIONS,
            ),
            primary_features: owned(PRIMARY_FEATURES),
            secondary_features: owned(SECONDARY_FEATURES),
            model_prefixes: owned(MODEL_PREFIXES),
            cpus: owned(CPUS),
            printer_mechanisms: owned(PRINTER_MECHANISMS),
            printer_resolutions: owned(PRINTER_RESOLUTIONS),
            battery_chemistries: owned(BATTERY_CHEMISTRIES),
            card_networks: owned(CARD_NETWORKS),
        }
    }
}

impl Pools {
    /// Pools that must be non-empty for generation to succeed, by name.
    ///
    /// `address_labels` is not listed; its required size depends on the
    /// configured address count and is checked separately.
    pub fn required(&self) -> Vec<(&'static str, &[String])> {
        let mut pools: Vec<(&'static str, &[String])> = vec![
            ("brands", &self.brands),
            ("primary_features", &self.primary_features),
            ("secondary_features", &self.secondary_features),
            ("model_prefixes", &self.model_prefixes),
            ("cpus", &self.cpus),
            ("printer_mechanisms", &self.printer_mechanisms),
            ("printer_resolutions", &self.printer_resolutions),
            ("battery_chemistries", &self.battery_chemistries),
            ("card_networks", &self.card_networks),
        ];
        for ty in ProductType::ALL {
            pools.push((category_pool_name(ty), self.categories.get(ty)));
            pools.push((description_pool_name(ty), self.descriptions.get(ty)));
        }
        pools
    }
}

fn category_pool_name(ty: ProductType) -> &'static str {
    match ty {
        ProductType::Desktop => "categories.desktop",
        ProductType::Laptop => "categories.laptop",
        ProductType::Printer => "categories.printer",
        ProductType::Accessory => "categories.accessory",
    }
}

fn description_pool_name(ty: ProductType) -> &'static str {
    match ty {
        ProductType::Desktop => "descriptions.desktop",
        ProductType::Laptop => "descriptions.laptop",
        ProductType::Printer => "descriptions.printer",
        ProductType::Accessory => "descriptions.accessory",
    }
}
