// Output formatting: terminal display of reports and word counts.

pub mod terminal;
