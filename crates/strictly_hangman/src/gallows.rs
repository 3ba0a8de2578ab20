//! ASCII gallows drawing.

use crate::MAX_CHANCES;
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Gallows template. Each digit is the slot of the body part whose
/// threshold equals that digit.
const TEMPLATE: &str = concat!(
    "    ______\n",
    "    ||   |\n",
    "    ||   5\n",
    "    ||  342\n",
    "    ||  1 0\n",
    "____||_______",
);

/// A part of the hanged figure.
///
/// Parts are listed in the order they appear as chances run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum BodyPart {
    /// Drawn at 5 chances or fewer.
    Head,
    /// Drawn at 4 chances or fewer.
    Torso,
    /// Drawn at 3 chances or fewer.
    LeftArm,
    /// Drawn at 2 chances or fewer.
    RightArm,
    /// Drawn at 1 chance or fewer.
    LeftLeg,
    /// Drawn at 0 chances.
    RightLeg,
}

impl BodyPart {
    /// Highest remaining-chances value at which this part is drawn.
    pub fn threshold(self) -> u8 {
        match self {
            Self::Head => 5,
            Self::Torso => 4,
            Self::LeftArm => 3,
            Self::RightArm => 2,
            Self::LeftLeg => 1,
            Self::RightLeg => 0,
        }
    }

    /// Character drawn for this part.
    pub fn symbol(self) -> char {
        match self {
            Self::Head => 'O',
            Self::Torso => '|',
            Self::LeftArm | Self::LeftLeg => '/',
            Self::RightArm | Self::RightLeg => '\\',
        }
    }

    /// Returns true if the part is drawn with `chances` left.
    pub fn is_visible(self, chances: u8) -> bool {
        chances <= self.threshold()
    }

    fn slot(self) -> char {
        char::from(b'0' + self.threshold())
    }
}

/// Draws the gallows for the given remaining chances.
///
/// Parts accumulate as chances drop: 6 is an empty gallows, 0 the full
/// figure. Values above [`MAX_CHANCES`] draw an empty gallows.
#[instrument]
pub fn gallows_art(chances: u8) -> String {
    let chances = chances.min(MAX_CHANCES);
    BodyPart::iter().fold(TEMPLATE.to_string(), |art, part| {
        let drawn = if part.is_visible(chances) { part.symbol() } else { ' ' };
        art.replace(part.slot(), &drawn.to_string())
    })
}
