// src/tui/app.rs — Chat UI state, event loop, and rendering.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::ChatClient;
use crate::core::{Intent, PendingSend, Phase, SendOutcome, SessionController, ViewState};

use super::theme::Theme;
use super::widgets;

// ── Key mapping ──────────────────────────────────────────────────

/// What a key press asks the UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Intent(Intent),
    ScrollUp,
    ScrollDown,
    Quit,
    None,
}

/// Map a key press to an action given what is on screen.
pub fn key_action(view: &ViewState, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // The popup is modal.
    if view.popup_visible {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::Intent(Intent::DismissPopup),
            _ => Action::None,
        };
    }

    match view.phase {
        Phase::Entry => match key.code {
            KeyCode::Enter => Action::Intent(Intent::StartConversation),
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        },
        Phase::Conversation => match key.code {
            KeyCode::Char('n') if ctrl => Action::Intent(Intent::RequestNewSession),
            KeyCode::Enter => Action::Intent(Intent::SubmitDraft(view.draft.clone())),
            KeyCode::Esc => Action::Quit,
            KeyCode::PageUp | KeyCode::Up => Action::ScrollUp,
            KeyCode::PageDown | KeyCode::Down => Action::ScrollDown,
            // Input is read-only while a reply is pending.
            _ if view.pending => Action::None,
            KeyCode::Backspace => {
                let mut draft = view.draft.clone();
                draft.pop();
                Action::Intent(Intent::UpdateDraft(draft))
            }
            KeyCode::Char(c) if !ctrl => {
                let mut draft = view.draft.clone();
                draft.push(c);
                Action::Intent(Intent::UpdateDraft(draft))
            }
            _ => Action::None,
        },
    }
}

// ── App state ────────────────────────────────────────────────────

struct App {
    controller: SessionController,
    client: Arc<dyn ChatClient>,
    runtime: Handle,
    outcomes_tx: UnboundedSender<(PendingSend, SendOutcome)>,
    outcomes_rx: UnboundedReceiver<(PendingSend, SendOutcome)>,
    /// Lines scrolled back from the newest turn, never past the first line.
    scroll_back: u16,
    /// Body lines hidden above the window at the last draw.
    overflow: u16,
}

impl App {
    fn new(controller: SessionController, client: Arc<dyn ChatClient>, runtime: Handle) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            client,
            runtime,
            outcomes_tx,
            outcomes_rx,
            scroll_back: 0,
            overflow: 0,
        }
    }

    /// Record the latest overflow and keep `scroll_back` within it.
    fn set_overflow(&mut self, overflow: u16) {
        self.overflow = overflow;
        self.scroll_back = self.scroll_back.min(overflow);
    }

    fn scroll_up(&mut self) {
        self.scroll_back = self.scroll_back.saturating_add(1).min(self.overflow);
    }

    fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }

    fn dispatch(&mut self, intent: Intent) {
        if intent == Intent::RequestNewSession {
            self.scroll_back = 0;
        }
        if let Some(ticket) = self.controller.dispatch(intent) {
            self.scroll_back = 0;
            self.spawn_send(ticket);
        }
    }

    /// Run the round trip off the UI thread; the outcome comes back on the channel.
    fn spawn_send(&self, ticket: PendingSend) {
        let client = Arc::clone(&self.client);
        let tx = self.outcomes_tx.clone();
        let request = ticket.request();
        self.runtime.spawn(async move {
            let outcome = SendOutcome::from(client.send(request).await);
            // Receiver only goes away when the UI has exited.
            let _ = tx.send((ticket, outcome));
        });
    }

    fn drain_outcomes(&mut self) {
        while let Ok((ticket, outcome)) = self.outcomes_rx.try_recv() {
            self.controller.apply(ticket, outcome);
            self.scroll_back = 0;
        }
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the chat UI. Blocks until the user quits (Ctrl-C, or Esc / q on the
/// entry screen). Chat requests run on `runtime`.
pub fn run_chat_ui(
    controller: SessionController,
    client: Arc<dyn ChatClient>,
    runtime: Handle,
) -> anyhow::Result<()> {
    let mut app = App::new(controller, client, runtime);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.drain_outcomes();

        let view = app.controller.snapshot();
        let mut overflow = 0;
        terminal.draw(|f| overflow = render(f, &view, app.scroll_back))?;
        app.set_overflow(overflow);

        // Short poll so replies show up promptly.
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_action(&view, key) {
            Action::Quit => return Ok(()),
            Action::Intent(intent) => app.dispatch(intent),
            Action::ScrollUp => app.scroll_up(),
            Action::ScrollDown => app.scroll_down(),
            Action::None => {}
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

/// Draw one frame. Returns the conversation body's overflow (0 elsewhere).
pub fn render(f: &mut Frame, view: &ViewState, scroll_back: u16) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Screen
            Constraint::Length(1), // Footer / key hints
        ])
        .split(f.area());

    let overflow = match view.phase {
        Phase::Entry => {
            widgets::entry::render(f, chunks[0]);
            0
        }
        Phase::Conversation => widgets::conversation::render(f, chunks[0], view, scroll_back),
    };
    render_footer(f, chunks[1], view);

    if view.popup_visible {
        widgets::popup::render(f, f.area());
    }
    overflow
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, view: &ViewState) {
    let hints = if view.popup_visible {
        vec![
            Span::styled(" Enter/Esc", Theme::key_hint()),
            Span::styled(" close", Theme::key_desc()),
        ]
    } else {
        match view.phase {
            Phase::Entry => vec![
                Span::styled(" Enter", Theme::key_hint()),
                Span::styled(" start  ", Theme::key_desc()),
                Span::styled("q", Theme::key_hint()),
                Span::styled(" quit", Theme::key_desc()),
            ],
            Phase::Conversation => vec![
                Span::styled(" Enter", Theme::key_hint()),
                Span::styled(" send  ", Theme::key_desc()),
                Span::styled("Ctrl-N", Theme::key_hint()),
                Span::styled(" new session  ", Theme::key_desc()),
                Span::styled("\u{2191}\u{2193}", Theme::key_hint()),
                Span::styled(" scroll  ", Theme::key_desc()),
                Span::styled("Esc", Theme::key_hint()),
                Span::styled(" quit", Theme::key_desc()),
            ],
        }
    };

    f.render_widget(Paragraph::new(Line::from(hints)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ChatReply, ChatRequest};
    use crate::core::types::CONNECTION_ERROR_TEXT;
    use crate::core::Turn;
    use crate::infra::errors::FrontDeskError;
    use crate::infra::session::{SessionId, UuidIdentity};
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    struct EchoClient;

    #[async_trait]
    impl ChatClient for EchoClient {
        async fn send(&self, request: ChatRequest) -> Result<ChatReply, FrontDeskError> {
            if request.message == "fail" {
                return Err(FrontDeskError::Decode("nope".into()));
            }
            Ok(ChatReply {
                reply: format!("echo: {}", request.message),
            })
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn view(phase: Phase) -> ViewState {
        ViewState {
            phase,
            session_id: SessionId::new("s"),
            turns: Vec::new(),
            pending: false,
            popup_visible: false,
            draft: String::new(),
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(view: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| {
            render(f, view, 0);
        })
        .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_entry_keys() {
        let v = view(Phase::Entry);
        assert_eq!(
            key_action(&v, key(KeyCode::Enter)),
            Action::Intent(Intent::StartConversation)
        );
        assert_eq!(key_action(&v, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(key_action(&v, key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_conversation_typing_and_submit() {
        let mut v = view(Phase::Conversation);
        v.draft = "fev".into();
        assert_eq!(
            key_action(&v, key(KeyCode::Char('e'))),
            Action::Intent(Intent::UpdateDraft("feve".into()))
        );
        assert_eq!(
            key_action(&v, key(KeyCode::Backspace)),
            Action::Intent(Intent::UpdateDraft("fe".into()))
        );
        assert_eq!(
            key_action(&v, key(KeyCode::Enter)),
            Action::Intent(Intent::SubmitDraft("fev".into()))
        );
        assert_eq!(
            key_action(&v, ctrl('n')),
            Action::Intent(Intent::RequestNewSession)
        );
        // 'q' is just a letter once the conversation has started.
        assert_eq!(
            key_action(&v, key(KeyCode::Char('q'))),
            Action::Intent(Intent::UpdateDraft("fevq".into()))
        );
    }

    #[test]
    fn test_typing_ignored_while_pending() {
        let mut v = view(Phase::Conversation);
        v.pending = true;
        assert_eq!(key_action(&v, key(KeyCode::Char('a'))), Action::None);
        assert_eq!(key_action(&v, key(KeyCode::Backspace)), Action::None);
        // Submit still reaches the controller, which ignores it.
        assert_eq!(
            key_action(&v, key(KeyCode::Enter)),
            Action::Intent(Intent::SubmitDraft(String::new()))
        );
    }

    #[test]
    fn test_popup_is_modal() {
        let mut v = view(Phase::Conversation);
        v.popup_visible = true;
        assert_eq!(
            key_action(&v, key(KeyCode::Enter)),
            Action::Intent(Intent::DismissPopup)
        );
        assert_eq!(key_action(&v, key(KeyCode::Char('a'))), Action::None);
        assert_eq!(key_action(&v, ctrl('c')), Action::Quit);
    }

    #[test]
    fn test_render_entry_screen() {
        let text = draw(&view(Phase::Entry));
        assert!(text.contains("Hospital AI"));
        assert!(text.contains("Query Report / Start"));
    }

    #[test]
    fn test_render_empty_conversation() {
        let text = draw(&view(Phase::Conversation));
        assert!(text.contains("Reception Desk"));
        assert!(text.contains("Welcome to the reception."));
        assert!(text.contains("Type your message here..."));
    }

    #[test]
    fn test_render_turns_and_typing() {
        let mut v = view(Phase::Conversation);
        v.turns = vec![Turn::user("I have a fever"), Turn::service("Noted.")];
        v.pending = true;
        let text = draw(&v);
        assert!(text.contains("I have a fever"));
        assert!(text.contains("Noted."));
        assert!(text.contains("Typing..."));
        assert!(!text.contains("Welcome to the reception."));
    }

    #[test]
    fn test_render_popup() {
        let mut v = view(Phase::Conversation);
        v.popup_visible = true;
        let text = draw(&v);
        assert!(text.contains("Query Noted"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_render_reports_overflow() {
        let mut v = view(Phase::Conversation);
        v.turns = (0..40).map(|i| Turn::service(format!("line {i}"))).collect();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut overflow = 0;
        terminal
            .draw(|f| overflow = render(f, &v, 0))
            .unwrap();
        // 80 body lines (turn + separator) in a window far shorter than that.
        assert!(overflow > 50);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("line 39"));

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| overflow = render(f, &view(Phase::Entry), 0))
            .unwrap();
        assert_eq!(overflow, 0);
    }

    #[tokio::test]
    async fn test_scroll_back_clamped_to_overflow() {
        let controller = SessionController::new(Box::new(UuidIdentity));
        let mut app = App::new(controller, Arc::new(EchoClient), Handle::current());

        app.set_overflow(5);
        for _ in 0..200 {
            app.scroll_up();
        }
        assert_eq!(app.scroll_back, 5);
        app.scroll_down();
        assert_eq!(app.scroll_back, 4);

        // Transcript shrank (new session): scroll position follows.
        app.set_overflow(2);
        assert_eq!(app.scroll_back, 2);
        app.set_overflow(0);
        assert_eq!(app.scroll_back, 0);
    }

    async fn settle(app: &mut App) {
        for _ in 0..100 {
            app.drain_outcomes();
            if !app.controller.is_pending() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("reply never arrived");
    }

    #[tokio::test]
    async fn test_app_round_trip_through_channel() {
        let controller = SessionController::new(Box::new(UuidIdentity));
        let mut app = App::new(controller, Arc::new(EchoClient), Handle::current());

        app.dispatch(Intent::StartConversation);
        app.dispatch(Intent::UpdateDraft("hello".into()));
        app.dispatch(Intent::SubmitDraft("hello".into()));
        assert!(app.controller.is_pending());
        assert_eq!(app.controller.turns().len(), 1);

        settle(&mut app).await;
        assert_eq!(app.controller.turns()[1].text(), "echo: hello");

        app.dispatch(Intent::SubmitDraft("fail".into()));
        settle(&mut app).await;
        assert_eq!(app.controller.turns()[3].text(), CONNECTION_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_app_drops_reply_after_new_session() {
        let controller = SessionController::new(Box::new(UuidIdentity));
        let mut app = App::new(controller, Arc::new(EchoClient), Handle::current());

        app.dispatch(Intent::SubmitDraft("hello".into()));
        app.dispatch(Intent::RequestNewSession);
        assert!(app.controller.turns().is_empty());

        settle(&mut app).await;
        assert!(app.controller.turns().is_empty());
    }
}
