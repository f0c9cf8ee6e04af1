//! # Kaidoku - Flow Structuring and Pseudocode Generation Engine
//!
//! **Kaidoku** converts declarative, graph-shaped workflow definitions
//! ("flows") into structured, readable pseudocode. A flow is a flat set of
//! named elements (decisions, loops, screens, action calls, assignments,
//! subflow invocations) wired together by `targetReference` connectors, some
//! of which form cycles. The engine rebuilds proper nesting from that graph:
//! decision rules become `if`/`else if`/`else` chains, loop exits become
//! `for` bodies with a continuation, fault connectors become `try`/`catch`,
//! and elements reachable from several paths are folded into a single
//! reusable block referenced by name.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical decoded model of
//! a flow document; decoding the on-disk format is a collaborator's job.
//!
//! 1.  **Load Your Document**: Decode your flow format into [`flow::Flow`]
//!     (JSON documents deserialize directly via serde), or implement
//!     [`flow::IntoFlow`] for your own decoded representation.
//! 2.  **Structure**: Use [`structurer::Structurer`] to walk the connector
//!     graph and build a [`tree::ParseTreeNode`] parse tree.
//! 3.  **Render**: Pick a [`render::Formatter`] implementation to turn the
//!     tree into text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kaidoku::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = std::fs::read_to_string("flow.json")?;
//!     let document: FlowDocument = serde_json::from_str(&raw)?;
//!     let flow = document.into_flow()?;
//!
//!     let tree = Structurer::new(&flow).structure()?;
//!
//!     let formatter = JsFormatter;
//!     println!("{}", formatter.render(&flow, &tree));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod flow;
pub mod index;
pub mod prelude;
pub mod render;
pub mod structurer;
pub mod tree;
