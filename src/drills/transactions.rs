//! Questions about a [`TradeBook`].

use std::fmt;
use std::sync::Arc;

use crate::fixtures::TradeBook;
use crate::optional::Optional;
use crate::records::{Trader, Transaction};
use crate::sink::{OutputSink, StdOutSink};
use crate::types::{Dir, Sequence};

const CAMBRIDGE: &str = "Cambridge";
const MILAN: &str = "Milan";

/// Query set over an owned [`TradeBook`].
///
/// Every answer is recomputed from the book on each call.
pub struct TransactionQuestions {
    book: TradeBook,
    sink: Arc<dyn OutputSink>,
}

impl fmt::Debug for TransactionQuestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionQuestions")
            .field("transactions", &self.book.transactions.len())
            .finish_non_exhaustive()
    }
}

impl TransactionQuestions {
    pub fn new(book: TradeBook) -> Self {
        Self {
            book,
            sink: Arc::new(StdOutSink),
        }
    }

    /// Send printed output to `sink` instead of stdout.
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    fn transactions(&self) -> &Sequence<Transaction> {
        &self.book.transactions
    }

    /// All 2011 transactions, smallest value first.
    pub fn transactions_2011(&self) -> Sequence<Transaction> {
        self.transactions()
            .filter(|t| t.year == 2011)
            .sorted_by(|t| t.value, Dir::Asc)
    }

    /// Cities traders work in, each once, in first-seen order.
    pub fn unique_cities(&self) -> Sequence<String> {
        self.transactions().map(|t| t.trader.city.clone()).distinct()
    }

    /// Cambridge traders, each once, sorted by name.
    pub fn cambridge_traders(&self) -> Sequence<Trader> {
        self.transactions()
            .map(|t| t.trader.clone())
            .filter(|trader| trader.city == CAMBRIDGE)
            .distinct()
            .sorted_by(|trader| trader.name.clone(), Dir::Asc)
    }

    /// Every trader name, once each, sorted and concatenated with no separator.
    pub fn trader_names(&self) -> String {
        self.transactions()
            .map(|t| t.trader.name.clone())
            .distinct()
            .sorted(Dir::Asc)
            .join("")
    }

    pub fn is_milan_based(&self) -> bool {
        self.transactions().any_match(|t| t.trader.city == MILAN)
    }

    /// Print the value of every transaction by a Cambridge trader.
    pub fn print_cambridge_transactions(&self) {
        self.transactions()
            .filter(|t| t.trader.city == CAMBRIDGE)
            .for_each(|t| self.sink.emit_line(&t.value.to_string()));
    }

    /// Highest transaction value, if there are any transactions.
    pub fn highest_value_trade(&self) -> Optional<u32> {
        self.transactions().max_value(|t| t.value)
    }

    /// The transaction with the smallest value; the earliest one wins a tie.
    pub fn smallest_transaction(&self) -> Optional<Transaction> {
        self.transactions()
            .reduce_min(|t| t.value)
            .map(Transaction::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionQuestions;
    use crate::fixtures::TradeBook;
    use crate::optional::Optional;
    use crate::sink::MemorySink;
    use std::sync::Arc;

    fn questions() -> TransactionQuestions {
        TransactionQuestions::new(TradeBook::standard())
    }

    #[test]
    fn transactions_2011_sorted_by_value() {
        let out = questions().transactions_2011();
        let summary: Vec<_> = out.iter().map(|t| (t.trader.name.as_str(), t.value)).collect();
        assert_eq!(summary, vec![("Brian", 300), ("Raoul", 400)]);
    }

    #[test]
    fn unique_cities_in_first_seen_order() {
        let cities = questions().unique_cities().into_vec();
        assert_eq!(cities, vec!["Cambridge", "Milan"]);
    }

    #[test]
    fn cambridge_traders_sorted_by_name() {
        let names: Vec<_> = questions()
            .cambridge_traders()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Alan", "Brian", "Raoul"]);
    }

    #[test]
    fn trader_names_concatenated() {
        assert_eq!(questions().trader_names(), "AlanBrianMarioRaoul");
    }

    #[test]
    fn milan_check() {
        assert!(questions().is_milan_based());
        let no_milan = TradeBook::new(Vec::new());
        assert!(!TransactionQuestions::new(no_milan).is_milan_based());
    }

    #[test]
    fn prints_cambridge_values_in_order() {
        let sink = Arc::new(MemorySink::new());
        let q = questions().with_sink(sink.clone());
        q.print_cambridge_transactions();
        assert_eq!(sink.lines(), vec!["300", "1000", "400", "950"]);
    }

    #[test]
    fn extremes() {
        let q = questions();
        assert_eq!(q.highest_value_trade(), Optional::of(1000));
        let smallest = q.smallest_transaction().into_option().unwrap();
        assert_eq!(smallest.trader.name, "Brian");
        assert_eq!(smallest.value, 300);
    }

    #[test]
    fn extremes_on_empty_book_are_absent() {
        let q = TransactionQuestions::new(TradeBook::new(Vec::new()));
        assert!(q.highest_value_trade().is_absent());
        assert!(q.smallest_transaction().is_absent());
    }
}
