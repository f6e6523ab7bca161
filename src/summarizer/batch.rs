//! Parallel summarization of many documents
//!
//! A [`Summarizer`] is read-only, so documents are fanned out with rayon and
//! no locking. Results come back in input order.

use super::engine::Summarizer;
use crate::errors::Result;
use rayon::prelude::*;

/// Summarize every document with the same sentence count
pub fn summarize_batch<S>(
    summarizer: &Summarizer,
    documents: &[S],
    num_sentences: usize,
) -> Vec<Result<String>>
where
    S: AsRef<str> + Sync,
{
    debug_event!(documents = documents.len(), "summarizing batch");
    documents
        .par_iter()
        .map(|doc| summarizer.summarize(doc.as_ref(), num_sentences))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizeError;

    #[test]
    fn test_batch_matches_sequential() {
        let summarizer = Summarizer::default();
        let docs = vec![
            "Cats are great. Dogs are great too. Cats and dogs are both pets.".to_string(),
            "Rust is fast. Go is simple. Rust is fast.".to_string(),
            "Trains run late. Buses run later. Bikes never run late.".to_string(),
        ];

        let batch = summarize_batch(&summarizer, &docs, 1);

        assert_eq!(batch.len(), docs.len());
        for (doc, result) in docs.iter().zip(&batch) {
            let expected = summarizer.summarize(doc, 1).unwrap();
            assert_eq!(result.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn test_batch_keeps_errors_in_place() {
        let summarizer = Summarizer::default();
        let docs = ["Solar power grows.", "", "Wind power grows too."];

        let batch = summarize_batch(&summarizer, &docs, 1);

        assert!(batch[0].is_ok());
        assert!(matches!(batch[1], Err(SummarizeError::InvalidInput(_))));
        assert!(batch[2].is_ok());
    }
}
