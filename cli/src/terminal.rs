//! Terminal rendering of the trip list view.

use std::io::{BufRead, Write};

use viagens_core::{TripCard, TripView};

/// Writes cards and messages to `out`; reads confirmation answers from
/// `input` unless `assume_yes` is set.
pub struct TerminalView<R, W> {
    input: R,
    out: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, out: W, assume_yes: bool) -> Self {
        Self {
            input,
            out,
            assume_yes,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}

// Write errors are dropped: the view contract has no error channel.
impl<R: BufRead, W: Write> TripView for TerminalView<R, W> {
    fn render_cards(&mut self, cards: &[TripCard]) {
        if cards.is_empty() {
            let _ = writeln!(self.out, "(nenhuma viagem)");
            return;
        }
        for card in cards {
            let _ = writeln!(self.out, "[{}] {}", card.id, card.destination);
            let _ = writeln!(self.out, "    {}", card.description);
            let _ = writeln!(self.out, "    Datas: {}", card.date_range);
            let _ = writeln!(self.out, "    {}", card.price);
        }
    }

    fn render_load_failure(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    fn reset_form(&mut self) {}

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.out, "! {message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let _ = write!(self.out, "{message} [s/N] ");
        let _ = self.out.flush();

        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes")
    }
}
