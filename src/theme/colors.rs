//! Color constants for the card's soft romantic palette.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const MIDNIGHT: &str = "#1a1333";
pub const MIDNIGHT_DEEP: &str = "#120d26";
pub const MIDNIGHT_BORDER: &str = "#2c2150";

// === BLUSH (Primary accents) ===
pub const BLUSH: &str = "#FFB6C1";
pub const PINK: &str = "#FFC0CB";
pub const ROSE_GLOW: &str = "rgba(255, 182, 193, 0.35)";

// === LAVENDER (Secondary accents) ===
pub const ORCHID: &str = "#DDA0DD";
pub const LAVENDER: &str = "#E6E6FA";

// === CREAM (Highlights, titles) ===
pub const CREAM: &str = "#FFF8DC";
pub const GOLD: &str = "#f4d58d";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#fdf6f8";
pub const TEXT_SECONDARY: &str = "rgba(253, 246, 248, 0.75)";
pub const TEXT_MUTED: &str = "rgba(253, 246, 248, 0.5)";

/// Confetti piece colors, picked at random per piece.
pub const CONFETTI: [&str; 5] = [BLUSH, ORCHID, LAVENDER, PINK, CREAM];
