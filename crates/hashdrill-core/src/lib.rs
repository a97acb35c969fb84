//! Hash-based array and string exercises.
//!
//! Every function here is pure: it reads its input, builds a throwaway
//! lookup structure, and returns a fresh value.

pub mod anagram;
pub mod codec;
pub mod consecutive;
pub mod duplicate;
pub mod frequency;
pub mod product;
pub mod sudoku;
pub mod two_sum;

pub use anagram::{AnagramError, Operand, group_anagrams, is_anagram};
pub use codec::{CodecError, decode, encode};
pub use consecutive::longest_consecutive;
pub use duplicate::has_duplicate;
pub use frequency::top_k_frequent;
pub use product::{ProductError, product_except_self};
pub use sudoku::{Board, SudokuError};
pub use two_sum::{two_sum, two_sum_sorted};
