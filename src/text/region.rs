/// A block of output lines. Operations mutate in place and return `&mut Self`
/// so a LaTeX block can be assembled with chained calls and joined once at
/// the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    lines: Vec<String>,
}

impl Region {
    pub fn new() -> Self {
        Region { lines: Vec::new() }
    }

    /// Create a region from a multiline &str (split on "\n")
    pub fn from_str(s: &str) -> Self {
        let lines = if s.is_empty() {
            Vec::new()
        } else {
            s.split('\n').map(str::to_string).collect()
        };
        Region { lines }
    }

    pub fn push_front_line<S: Into<String>>(&mut self, line: S) -> &mut Self {
        self.lines.insert(0, line.into());
        self
    }

    pub fn push_back_line<S: Into<String>>(&mut self, line: S) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Surround the region with `\begin{name}{arg}` / `\end{name}`.
    pub fn wrap_environment(&mut self, name: &str, arg: Option<&str>) -> &mut Self {
        let begin = match arg {
            Some(a) => format!("\\begin{{{}}}{{{}}}", name, a),
            None => format!("\\begin{{{}}}", name),
        };
        self.push_front_line(begin);
        self.push_back_line(format!("\\end{{{}}}", name))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines with '\n'.
    pub fn apply(&self) -> String {
        self.lines.join("\n")
    }
}
