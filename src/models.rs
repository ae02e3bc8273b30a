use crate::error::IconError;
use image::Rgba;
use std::path::PathBuf;

/// Edge length in pixels of every generated icon.
pub const ICON_SIZE: u32 = 32;

/// Directory the game loads item textures from, relative to the working directory.
pub const OUTPUT_DIR: &str = "assets/items";

/// A single placeholder icon: the file to write and the color to fill it with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSpec {
    pub filename: &'static str,
    pub base_color: Rgba<u8>,
}

impl IconSpec {
    pub const fn new(filename: &'static str, rgba: [u8; 4]) -> Self {
        Self {
            filename,
            base_color: Rgba(rgba),
        }
    }
}

/// Item textures the game expects to find in `OUTPUT_DIR`.
pub const ITEM_ICONS: [IconSpec; 11] = [
    IconSpec::new("iron_sword.png", [169, 169, 169, 255]),      // Gray
    IconSpec::new("steel_axe.png", [192, 192, 192, 255]),       // Light gray
    IconSpec::new("leather_helmet.png", [139, 90, 43, 255]),    // Brown
    IconSpec::new("iron_chestplate.png", [169, 169, 169, 255]), // Gray
    IconSpec::new("health_potion.png", [220, 20, 60, 255]),     // Red
    IconSpec::new("bread.png", [210, 180, 140, 255]),           // Tan
    IconSpec::new("iron_ore.png", [105, 105, 105, 255]),        // Dark gray
    IconSpec::new("wood.png", [139, 90, 43, 255]),              // Brown
    IconSpec::new("gold_ore.png", [255, 215, 0, 255]),          // Gold
    IconSpec::new("pickaxe.png", [112, 128, 144, 255]),         // Slate gray
    IconSpec::new("fishing_rod.png", [139, 90, 43, 255]),       // Brown
];

/// Events reported by the generator while it works through the table.
#[derive(Debug)]
pub enum GenerationMessage {
    /// The icon was drawn and written to `path`.
    Created {
        filename: &'static str,
        path: PathBuf,
    },
    /// The icon could not be written. The remaining icons are still attempted.
    Failed {
        filename: &'static str,
        error: IconError,
    },
}

/// Outcome of one pass over an icon table.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub messages: Vec<GenerationMessage>,
}

impl GenerationReport {
    pub fn created(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| matches!(m, GenerationMessage::Created { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.messages.len() - self.created()
    }
}
