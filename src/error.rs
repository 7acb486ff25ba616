use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error serializing or deserializing a bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary file {0} could not be encoded or decoded")]
    DictionaryCodingError(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Word runs outside the board at row {row}, col {col}")]
    OutsideBoard { row: usize, col: usize },

    /// Attempt to place a letter over a different letter already on the board
    #[error("Letter mismatch with tile already at row {row}, col {col}")]
    LetterMismatch { row: usize, col: usize },

    /// The precomputed letter maps cover at most two blank tiles
    #[error("Rack holds {0} blank tiles, at most 2 are supported")]
    TooManyBlanks(usize),

    /// Error parsing a premium cell
    #[error("Invalid premium cell: \"{0}\"")]
    InvalidPremium(String),

    /// A rack tile must be A-Z or the blank symbol
    #[error("Invalid rack tile '{0}'")]
    InvalidRackTile(char),

    /// A rack holds at most 7 tiles
    #[error("Rack with {0} tiles exceeds capacity of 7")]
    RackOverflow(usize),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row of the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),
}
