//! liveterm - incremental terminal rendering for live test reports
//!
//! Renders headings, text blocks and lists whose items change over time,
//! rewriting only what changed by moving the cursor with a handful of
//! relative escape sequences. The same byte stream can be fed to a
//! [`VirtualTerminal`](core::term::VirtualTerminal), which shows exactly
//! what a real terminal would display.
//!
//! ```
//! use liveterm::core::term::VirtualTerminal;
//! use liveterm::ui::Container;
//!
//! let mut container = Container::new(VirtualTerminal::new());
//! let list = container.new_unordered_list("pkg", "example/pkg");
//! let test = container.list_mut(list).unwrap().new_item("RUN  TestParse");
//! container.render().unwrap();
//!
//! container.list_mut(list).unwrap().edit_item(test, "PASS TestParse").unwrap();
//! container.render().unwrap();
//!
//! assert_eq!(container.terminal().text(), "example/pkg\n\tPASS TestParse\n");
//! ```

pub mod config;
pub mod core;
pub mod ui;
