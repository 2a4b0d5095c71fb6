pub use crate::servers::capi::CapiExtractor;
pub use crate::servers::chan::{ChanExtractor, StatsLabels};
pub use crate::servers::Extractor;
pub use crate::servers::SinglePostFetch;
