use ropey::Rope;

/// Cursor position inside the compose area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, counted in chars.
    pub col: usize,
    /// Remembered column for vertical movement.
    goal_col: usize,
}

impl CursorPos {
    const fn origin() -> Self {
        Self {
            line: 0,
            col: 0,
            goal_col: 0,
        }
    }

    /// A cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            goal_col: col,
        }
    }

    const fn place(&mut self, col: usize) {
        self.col = col;
        self.goal_col = col;
    }
}

impl Default for CursorPos {
    fn default() -> Self {
        Self::origin()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Rope-backed editable text area.
///
/// All columns are char offsets, never bytes, so multi-byte input needs no
/// special casing anywhere above this type. The cursor belongs to the area
/// alone; nothing external repositions it after mount.
pub struct ComposeArea {
    rope: Rope,
    cursor: CursorPos,
}

impl ComposeArea {
    /// Seed the area with serialized markup (the mount contract).
    pub fn from_markup(markup: &str) -> Self {
        Self {
            rope: Rope::from_str(markup),
            cursor: CursorPos::origin(),
        }
    }

    pub fn empty() -> Self {
        Self::from_markup("")
    }

    /// Full serialized markup (the change-notification contract).
    pub fn markup(&self) -> String {
        self.rope.to_string()
    }

    pub const fn cursor(&self) -> CursorPos {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line, without its trailing newline.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(idx);
        let end = line.len_chars() - trailing_newline_chars(&line);
        Some(line.slice(..end).to_string())
    }

    /// Length of a line in chars, without its trailing newline.
    pub fn line_len(&self, idx: usize) -> usize {
        if idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(idx);
        line.len_chars() - trailing_newline_chars(&line)
    }

    /// Insert a character at the cursor. Returns `true`: content changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.place(self.cursor.col + 1);
        true
    }

    /// Insert a string at the cursor, moving the cursor past it.
    pub fn insert_str(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert(idx, s);
        let newlines = s.matches('\n').count();
        if newlines > 0 {
            self.cursor.line += newlines;
            let tail = s.rsplit('\n').next().unwrap_or("");
            self.cursor.place(tail.chars().count());
        } else {
            self.cursor.place(self.cursor.col + s.chars().count());
        }
        true
    }

    /// Split the current line at the cursor (Enter).
    pub fn newline(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.place(0);
        true
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Joins with the previous line at column zero. Returns whether
    /// anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx == 0 {
            return false;
        }
        if self.cursor.col == 0 {
            let prev_len = self.line_len(self.cursor.line - 1);
            self.rope.remove(idx - 1..idx);
            self.cursor.line -= 1;
            self.cursor.place(prev_len);
        } else {
            self.rope.remove(idx - 1..idx);
            self.cursor.place(self.cursor.col - 1);
        }
        true
    }

    /// Delete the character at the cursor (Delete). Joins with the next
    /// line at end of line. Returns whether anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(idx..idx + 1);
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.place(0);
    }

    pub fn move_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.place(len);
    }

    /// Move to the start of the previous word (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.place(self.line_len(self.cursor.line));
            }
            return;
        }
        let chars: Vec<char> = self
            .line(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut pos = self.cursor.col.min(chars.len());
        while pos > 0 && !is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        self.cursor.place(pos);
    }

    /// Move past the end of the current word (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.col >= len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.place(0);
            }
            return;
        }
        let chars: Vec<char> = self
            .line(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut pos = self.cursor.col;
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !is_word_char(chars[pos]) {
            pos += 1;
        }
        self.cursor.place(pos);
    }

    /// Move to a specific line and column, clamped to the content.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.cursor.line = line.min(self.line_count().saturating_sub(1));
        let max_col = self.line_len(self.cursor.line);
        self.cursor.place(col.min(max_col));
    }

    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.place(0);
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor.line = last;
        self.cursor.place(self.line_len(last));
    }

    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        let col = self.cursor.col.min(self.line_len(self.cursor.line));
        line_start + col
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.place(self.cursor.col - 1);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.place(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.place(self.cursor.col + 1);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.place(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.goal_col.min(self.line_len(self.cursor.line));
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.goal_col.min(self.line_len(self.cursor.line));
        }
    }
}

fn trailing_newline_chars(line: &ropey::RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 || line.char(len - 1) != '\n' {
        return 0;
    }
    if len >= 2 && line.char(len - 2) == '\r' {
        2
    } else {
        1
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl std::fmt::Debug for ComposeArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposeArea")
            .field("lines", &self.rope.len_lines())
            .field("cursor", &self.cursor)
            .finish()
    }
}
