// Statistics over word counts: vector alignment, TF, IDF and cosine similarity.

pub mod metrics;
pub mod vectors;
