pub mod builder;
pub mod lexicon;
pub mod pos;
pub mod source;
pub mod wordlist;

pub use builder::{BuildReport, DatasetBuilder, Rejection, VocabularyEntry};
pub use lexicon::{Lexicon, LexiconEntry};
pub use pos::{PartOfSpeech, Template};
pub use source::WordSource;
pub use wordlist::{parse_word_list, read_word_list};
