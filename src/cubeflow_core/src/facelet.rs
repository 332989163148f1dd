use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The six sticker colors of the original CubeFlow UI, closed at the type
/// level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// The face this color sits on in the solved cube: white on top, green
    /// in front.
    pub const fn face(self) -> Face {
        Face::ALL[self as usize]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Canonical face→color mapping of the solved cube.
    pub const fn color(self) -> Color {
        Color::ALL[self as usize]
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("expected exactly 54 facelets, got {0}")]
    WrongFaceletCount(usize),
    #[error("`{0}` is not one of the face letters U, R, F, D, L or B")]
    UnknownFaceLetter(char),
}

/// A cube described by its 54 sticker colors, faces in U R F D L B order,
/// each face row-major. This is the boundary representation the capture and
/// manual-entry collaborators produce; nothing past the validator works on
/// it directly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceletCube(pub(crate) [Color; 54]);

impl FaceletCube {
    pub const SOLVED: FaceletCube = {
        let mut facelets = [Color::White; 54];
        let mut i = 0;
        while i < 54 {
            facelets[i] = Face::ALL[i / 9].color();
            i += 1;
        }
        FaceletCube(facelets)
    };

    /// Construct from a flat facelet assignment.
    ///
    /// # Errors
    ///
    /// `WrongFaceletCount` unless exactly 54 colors are supplied.
    pub fn from_colors(colors: &[Color]) -> Result<FaceletCube, MalformedInputError> {
        let facelets: [Color; 54] = colors
            .try_into()
            .map_err(|_| MalformedInputError::WrongFaceletCount(colors.len()))?;
        Ok(FaceletCube(facelets))
    }

    pub fn facelets(&self) -> &[Color; 54] {
        &self.0
    }

    /// The color at (face, row, col), rows and columns zero-based from the
    /// top-left sticker of the face.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.0[face as usize * 9 + row * 3 + col]
    }

    pub fn center(&self, face: Face) -> Color {
        self.get(face, 1, 1)
    }

    pub fn is_solved(&self) -> bool {
        *self == FaceletCube::SOLVED
    }
}

impl FromStr for FaceletCube {
    type Err = MalformedInputError;

    /// Parses the 54-character face-letter string, e.g. the solved cube is
    /// `UUUUUUUUURRRRRRRRR...`. Each letter stands for the canonical color
    /// of that face.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut facelets = [Color::White; 54];
        let mut count = 0;
        for (i, c) in s.chars().enumerate() {
            if i >= 54 {
                return Err(MalformedInputError::WrongFaceletCount(s.chars().count()));
            }
            facelets[i] = match c {
                'U' => Face::U,
                'R' => Face::R,
                'F' => Face::F,
                'D' => Face::D,
                'L' => Face::L,
                'B' => Face::B,
                other => return Err(MalformedInputError::UnknownFaceLetter(other)),
            }
            .color();
            count += 1;
        }
        if count != 54 {
            return Err(MalformedInputError::WrongFaceletCount(count));
        }
        Ok(FaceletCube(facelets))
    }
}

impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in &self.0 {
            write!(f, "{}", color.face().letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_string_round_trips() {
        let s = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        let cube: FaceletCube = s.parse().unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.to_string(), s);
    }

    #[test]
    fn rejects_wrong_facelet_count() {
        assert_eq!(
            FaceletCube::from_colors(&[Color::White; 53]),
            Err(MalformedInputError::WrongFaceletCount(53))
        );
        assert_eq!(
            FaceletCube::from_colors(&[Color::White; 55]),
            Err(MalformedInputError::WrongFaceletCount(55))
        );
        assert!(matches!(
            "UUU".parse::<FaceletCube>(),
            Err(MalformedInputError::WrongFaceletCount(3))
        ));
    }

    #[test]
    fn rejects_unknown_face_letter() {
        let s = "XUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        assert_eq!(
            s.parse::<FaceletCube>(),
            Err(MalformedInputError::UnknownFaceLetter('X'))
        );
    }

    #[test]
    fn centers_carry_canonical_colors() {
        for face in Face::ALL {
            assert_eq!(FaceletCube::SOLVED.center(face), face.color());
        }
        assert_eq!(FaceletCube::SOLVED.get(Face::F, 0, 2), Color::Green);
    }
}
