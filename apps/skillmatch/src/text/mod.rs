// Text normalization: stoplist and lemma tables, Porter stemming, and the
// clean → tokenize → filter → lemmatize pipeline with keyword ranking.

pub mod lexicon;
pub mod normalizer;
pub mod stemmer;
