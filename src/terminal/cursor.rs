//! Typewriter cursor and its transitions.
//!
//! The cursor records where the engine is in the active script and which
//! display line it writes into. Boot and response typing use the same
//! position type; the tag says which script the indices refer to.
//!
//! Transitions are a pure reducer so they can be tested without an engine.

/// Position inside a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Index of the source line being revealed
    pub line: usize,
    /// Index of the next character of that line (in chars)
    pub char: usize,
    /// Display buffer line receiving the characters
    pub write_line: usize,
}

impl Position {
    pub fn new(line: usize, char: usize, write_line: usize) -> Self {
        Self {
            line,
            char,
            write_line,
        }
    }
}

/// Which script is being revealed, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Revealing the boot script
    Boot(Position),
    /// Waiting for a command
    Input,
    /// Revealing a command's response lines
    Response(Position),
}

/// Something that moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEvent {
    /// One character of the current line was written
    Revealed,
    /// The current line has no characters left
    LineFinished {
        /// Number of lines in the active script
        total: usize,
        /// Whether the next line continues on the same display line
        next_same_line: bool,
    },
    /// A response started writing into the given display line
    ResponseStarted { write_line: usize },
}

/// Apply an event to a cursor.
///
/// Events that make no sense for the current state leave it unchanged: boot
/// never restarts, and a response can only start from `Input`.
pub fn reduce(cursor: Cursor, event: CursorEvent) -> Cursor {
    match (cursor, event) {
        (Cursor::Boot(pos), CursorEvent::Revealed) => Cursor::Boot(Position {
            char: pos.char + 1,
            ..pos
        }),
        (Cursor::Response(pos), CursorEvent::Revealed) => Cursor::Response(Position {
            char: pos.char + 1,
            ..pos
        }),

        (
            Cursor::Boot(pos),
            CursorEvent::LineFinished {
                total,
                next_same_line,
            },
        ) => match next_line(pos, total, next_same_line) {
            Some(next) => Cursor::Boot(next),
            None => Cursor::Input,
        },
        // Response lines always start on their own display line
        (Cursor::Response(pos), CursorEvent::LineFinished { total, .. }) => {
            match next_line(pos, total, false) {
                Some(next) => Cursor::Response(next),
                None => Cursor::Input,
            }
        }

        (Cursor::Input, CursorEvent::ResponseStarted { write_line }) => {
            Cursor::Response(Position::new(0, 0, write_line))
        }

        (cursor, _) => cursor,
    }
}

fn next_line(pos: Position, total: usize, same_line: bool) -> Option<Position> {
    let line = pos.line + 1;
    if line >= total {
        return None;
    }
    let write_line = if same_line {
        pos.write_line
    } else {
        pos.write_line + 1
    };
    Some(Position::new(line, 0, write_line))
}
