//! Maps parsed terminal commands onto controller operations.
//!
//! # Design
//! Row numbers typed by the user are resolved to ids through the rows the
//! surface last presented. Mistakes the user can correct on the spot (an
//! unknown row, `save` with nothing open) are printed as hints and never
//! reach the network.

use std::io::Write;

use todo_core::{Notice, TodoApp, TodoId, Transport};

use crate::command::{self, Command};
use crate::terminal::TerminalSurface;

pub type TerminalApp<T, W> = TodoApp<T, TerminalSurface<W>>;

pub fn dispatch<T: Transport, W: Write>(
    app: &mut TerminalApp<T, W>,
    command: Command,
) -> Result<(), Notice> {
    match command {
        Command::Add(text) => {
            // A bare `add` retries whatever is still in the field.
            if let Some(text) = text {
                app.surface_mut().input = text;
            }
            let text = app.surface().input.clone();
            app.add(&text)
        }
        Command::Toggle(n) => match row(app, n) {
            Some(id) => app.toggle(id),
            None => Ok(()),
        },
        Command::Delete(n) => match row(app, n) {
            Some(id) => app.remove(id),
            None => Ok(()),
        },
        Command::Edit(n) => {
            if let Some(id) = row(app, n) {
                let text = app
                    .state()
                    .find(id)
                    .map(|t| t.text.clone())
                    .unwrap_or_default();
                app.begin_edit(id, &text);
            }
            Ok(())
        }
        Command::Type(text) => {
            if app.state().editing_id().is_none() {
                eprintln!("nothing is being edited (use `edit <n>` first)");
                return Ok(());
            }
            app.set_edit_text(&text);
            Ok(())
        }
        Command::Save => match app.state().editing_id() {
            Some(id) => app.save_edit(id),
            None => {
                eprintln!("nothing is being edited");
                Ok(())
            }
        },
        Command::Cancel => {
            app.cancel_edit();
            Ok(())
        }
        Command::Reload => app.load_all(),
        Command::Help => {
            println!("{}", command::HELP);
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

fn row<T: Transport, W: Write>(app: &TerminalApp<T, W>, n: usize) -> Option<TodoId> {
    let id = app.surface().row_id(n);
    if id.is_none() {
        eprintln!("no row {n}");
    }
    id
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient};

    /// Answers requests from a fixed list of replies and keeps what was sent.
    #[derive(Default)]
    struct CannedTransport {
        replies: VecDeque<HttpResponse>,
        sent: Vec<HttpRequest>,
    }

    impl CannedTransport {
        fn reply(mut self, status: u16, body: &str) -> Self {
            self.replies.push_back(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            });
            self
        }
    }

    impl Transport for CannedTransport {
        fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.push(request);
            self.replies
                .pop_front()
                .ok_or_else(|| ApiError::Transport("no reply queued".to_string()))
        }
    }

    const LISTING: &str =
        r#"[{"id":4,"text":"Buy milk","completed":false},{"id":9,"text":"Walk dog","completed":true}]"#;

    fn session(extra: CannedTransport) -> TerminalApp<CannedTransport, Vec<u8>> {
        let mut transport = CannedTransport::default().reply(200, LISTING);
        transport.replies.extend(extra.replies);
        let mut app = TodoApp::new(
            TodoClient::new("http://test"),
            transport,
            TerminalSurface::new(Vec::new(), None),
        );
        app.load_all().unwrap();
        app
    }

    fn body(request: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn bare_add_retries_text_kept_after_failure() {
        let extra = CannedTransport::default()
            .reply(500, "")
            .reply(201, r#"{"id":10,"text":"Call mom","completed":false}"#);
        let mut app = session(extra);

        let err = dispatch(&mut app, Command::Add(Some("Call mom".to_string()))).unwrap_err();
        assert_eq!(err, Notice::AddFailed);
        assert_eq!(app.surface().input, "Call mom");

        dispatch(&mut app, Command::Add(None)).unwrap();
        let sent = &app.transport().sent;
        assert_eq!(sent.len(), 3);
        assert_eq!(body(&sent[2]), serde_json::json!({"text": "Call mom"}));
        assert!(app.surface().input.is_empty());
        assert_eq!(app.state().todos().len(), 3);
    }

    #[test]
    fn edit_prefills_draft_from_stored_text() {
        let mut app = session(CannedTransport::default());
        dispatch(&mut app, Command::Edit(2)).unwrap();
        assert_eq!(app.state().editing_id(), Some(TodoId(9)));
        assert_eq!(app.state().editing_text(), Some("Walk dog"));
        assert_eq!(app.transport().sent.len(), 1);
    }

    #[test]
    fn type_then_save_patches_the_open_row() {
        let extra =
            CannedTransport::default().reply(200, r#"{"id":4,"text":"Buy oat milk","completed":false}"#);
        let mut app = session(extra);
        dispatch(&mut app, Command::Edit(1)).unwrap();
        dispatch(&mut app, Command::Type("Buy oat milk".to_string())).unwrap();
        dispatch(&mut app, Command::Save).unwrap();

        let sent = &app.transport().sent[1];
        assert_eq!(sent.method, HttpMethod::Patch);
        assert_eq!(sent.path, "http://test/api/todos/4");
        assert_eq!(body(sent), serde_json::json!({"text": "Buy oat milk"}));
        assert_eq!(app.state().editing_id(), None);
        assert_eq!(app.state().todos()[0].text, "Buy oat milk");
    }

    #[test]
    fn save_and_type_while_viewing_do_nothing() {
        let mut app = session(CannedTransport::default());
        dispatch(&mut app, Command::Type("stray".to_string())).unwrap();
        dispatch(&mut app, Command::Save).unwrap();
        assert_eq!(app.state().editing_id(), None);
        assert_eq!(app.state().editing_text(), None);
        assert_eq!(app.transport().sent.len(), 1);
    }

    #[test]
    fn unknown_row_sends_nothing() {
        let mut app = session(CannedTransport::default());
        dispatch(&mut app, Command::Toggle(3)).unwrap();
        dispatch(&mut app, Command::Delete(0)).unwrap();
        dispatch(&mut app, Command::Edit(7)).unwrap();
        assert_eq!(app.transport().sent.len(), 1);
        assert_eq!(app.state().editing_id(), None);
        assert_eq!(app.state().todos().len(), 2);
    }

    #[test]
    fn row_numbers_follow_presented_order() {
        let extra = CannedTransport::default().reply(200, r#"{"message":"Todo deleted successfully"}"#);
        let mut app = session(extra);
        dispatch(&mut app, Command::Delete(1)).unwrap();
        assert_eq!(app.transport().sent[1].method, HttpMethod::Delete);
        assert_eq!(app.transport().sent[1].path, "http://test/api/todos/4");
        assert_eq!(app.surface().row_id(1), Some(TodoId(9)));
    }
}
