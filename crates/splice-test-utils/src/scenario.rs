//! Canonical fixture texts.

/// Relative path of the source file in the default layout.
pub const SOURCE_PATH: &str = "tech-tree-expanded.js";
/// Relative path of the target file in the default layout.
pub const TARGET_PATH: &str = "public/js/app.js";
/// Relative path review mode writes to in the default layout.
pub const REVIEW_PATH: &str = "public/js/app.js.new";

pub const SOURCE: &str = "const TECH_DEFINITIONS_EXPANDED = {\n  a: {},\n  b: {},\n};";

pub const TARGET: &str = "const TECH_DEFINITIONS = {\n  x: {},\n};\n\n// Initialize tech state\n";

pub const EXPECTED: &str =
    "const TECH_DEFINITIONS = {\n  a: {},\n  b: {},\n};\n\n// Initialize tech state\n";

/// A target shaped like a real application file, with code around the block.
pub const APP_TARGET: &str = "\
const game = {
  techs: {},
};

const TECH_DEFINITIONS = {
  // TIER 1
  materials_metallurgy: {
    name: 'Metallurgy',
    position: { angle: 180.0, ring: 1.6 },
    cost: { info: 500 },
  },
};

// Initialize tech state
Object.keys(TECH_DEFINITIONS).forEach(key => {
  game.techs[key] = { researched: false };
});
";

/// A source shaped like a real expanded tech tree export.
pub const APP_SOURCE: &str = "\
// Generated tech tree
const TECH_DEFINITIONS_EXPANDED = {
  materials_metallurgy: {
    name: 'Metallurgy',
    position: { angle: 180.0, ring: 1.6 },
    cost: { info: 500 },
  },
  materials_iron: {
    name: 'Iron Smelting',
    requirements: { techs: ['materials_metallurgy'] },
  },
  stellarMastery: {
    name: 'Stellar Mastery',
    bonus: { unlockTier2: true },
  },
};

module.exports = TECH_DEFINITIONS_EXPANDED;
";
