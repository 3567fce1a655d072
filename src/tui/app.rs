use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::markets::{DashboardState, FetchError, MarketEntry, MarketsClient, SortKey};

const STATUS_TTL: Duration = Duration::from_secs(3);

/// A fetch result tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<MarketEntry>, FetchError>,
}

/// Whether keystrokes edit the search term or act as commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct App {
    pub state: DashboardState,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub fetch_in_flight: bool,

    client: MarketsClient,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,

    status_message: Option<String>,
    last_status_time: Option<Instant>,
}

impl App {
    pub fn new(client: MarketsClient) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: DashboardState::new(),
            input_mode: InputMode::Normal,
            should_quit: false,
            fetch_in_flight: false,
            client,
            outcome_tx,
            outcome_rx,
            status_message: None,
            last_status_time: None,
        }
    }

    /// Issue a background fetch. The outcome arrives on the internal
    /// channel tagged with the generation issued here.
    pub fn spawn_fetch(&mut self) {
        let generation = self.state.begin_fetch();
        self.fetch_in_flight = true;

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_markets().await;
            let _ = tx.send(FetchOutcome { generation, result });
        });
    }

    /// Drain any completed fetches. Stale generations are dropped without
    /// touching the in-flight indicator or the status line; only the
    /// newest fetch resolves the UI. A failure leaves the snapshot
    /// untouched.
    pub fn poll_fetch_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            let is_latest = outcome.generation == self.state.generation();
            if is_latest {
                self.fetch_in_flight = false;
            }
            match outcome.result {
                Ok(entries) => {
                    let count = entries.len();
                    if self.state.apply_fetch(outcome.generation, entries) {
                        info!("Applied fetch of {} entries", count);
                        self.set_status(format!("Loaded {} entries", count));
                    }
                }
                Err(e) => {
                    error!("Error fetching market data: {}", e);
                    if is_latest {
                        self.set_status("Fetch failed, showing last data".to_string());
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.state.clear_search();
            }
            KeyCode::Backspace => {
                let mut term = self.state.search_term().to_string();
                term.pop();
                self.state.set_search(term);
            }
            KeyCode::Char(c) => {
                let mut term = self.state.search_term().to_string();
                term.push(c);
                self.state.set_search(term);
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('m') => {
                self.state.set_sort(SortKey::MarketCap);
                self.set_status("Sorted by market cap".to_string());
            }
            KeyCode::Char('c') => {
                self.state.set_sort(SortKey::Change24h);
                self.set_status("Sorted by 24h % change".to_string());
            }
            KeyCode::Char('r') => {
                self.set_status("Refreshing...".to_string());
                self.spawn_fetch();
            }
            _ => {}
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.last_status_time = Some(Instant::now());
    }

    /// Current status line, if it has not expired.
    pub fn status(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Drop the status line once it is older than its TTL.
    pub fn tick(&mut self) {
        if let Some(last) = self.last_status_time {
            if last.elapsed() > STATUS_TTL {
                self.status_message = None;
                self.last_status_time = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_search_mode_edits_term_per_keystroke() {
        let mut app = App::new(MarketsClient::with_base_url("http://127.0.0.1:0"));

        app.handle_key(press(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Search);

        app.handle_key(press(KeyCode::Char('b')));
        app.handle_key(press(KeyCode::Char('i')));
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.state.search_term(), "bit");

        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.state.search_term(), "bi");

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.state.search_term(), "bi");
    }

    #[tokio::test]
    async fn test_escape_cancels_search_and_restores_full_view() {
        let mut app = App::new(MarketsClient::with_base_url("http://127.0.0.1:0"));

        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Esc));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.state.search_term(), "");
    }

    #[tokio::test]
    async fn test_sort_keys_set_sort_mode() {
        let mut app = App::new(MarketsClient::with_base_url("http://127.0.0.1:0"));

        app.handle_key(press(KeyCode::Char('m')));
        assert_eq!(app.state.sort(), Some(SortKey::MarketCap));

        app.handle_key(press(KeyCode::Char('c')));
        assert_eq!(app.state.sort(), Some(SortKey::Change24h));
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = App::new(MarketsClient::with_base_url("http://127.0.0.1:0"));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    fn entry(name: &str) -> MarketEntry {
        MarketEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: name[..3.min(name.len())].to_lowercase(),
            image: String::new(),
            current_price: 1.0,
            market_cap: 1.0,
            total_volume: 0.0,
            price_change_percentage_24h: 0.0,
        }
    }

    fn decode_error() -> FetchError {
        FetchError::Decode(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    #[tokio::test]
    async fn test_stale_outcome_leaves_fetch_indicator_and_status_alone() {
        let mut app = App::new(MarketsClient::with_base_url("http://127.0.0.1:0"));

        let stale = app.state.begin_fetch();
        let latest = app.state.begin_fetch();
        app.fetch_in_flight = true;

        // a stale success resolves late: dropped, still fetching
        app.outcome_tx
            .send(FetchOutcome {
                generation: stale,
                result: Ok(vec![entry("Bitcoin")]),
            })
            .unwrap();
        app.poll_fetch_outcomes();
        assert!(app.fetch_in_flight);
        assert!(app.state.snapshot().is_empty());

        // a stale failure must not post a misleading status either
        app.outcome_tx
            .send(FetchOutcome {
                generation: stale,
                result: Err(decode_error()),
            })
            .unwrap();
        app.poll_fetch_outcomes();
        assert!(app.fetch_in_flight);
        assert!(app.status().is_none());

        // the newest outcome resolves the indicator and applies
        app.outcome_tx
            .send(FetchOutcome {
                generation: latest,
                result: Ok(vec![entry("Ethereum")]),
            })
            .unwrap();
        app.poll_fetch_outcomes();
        assert!(!app.fetch_in_flight);
        assert_eq!(app.state.snapshot().len(), 1);
        assert_eq!(app.state.snapshot()[0].name, "Ethereum");
    }

    #[tokio::test]
    async fn test_latest_failure_posts_status_and_clears_indicator() {
        let mut app = App::new(MarketsClient::with_base_url("http://127.0.0.1:0"));

        let generation = app.state.begin_fetch();
        app.fetch_in_flight = true;

        app.outcome_tx
            .send(FetchOutcome {
                generation,
                result: Err(decode_error()),
            })
            .unwrap();
        app.poll_fetch_outcomes();

        assert!(!app.fetch_in_flight);
        assert_eq!(app.status(), Some("Fetch failed, showing last data"));
    }
}
