//! # PMB Assist
//!
//! A retrieval-augmented CLI assistant that answers questions about
//! new-student admissions (PMB) at Universitas Pendidikan Ganesha
//! (Undiksha) using a locally hosted LLM.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────┐   ┌──────────────────┐   ┌────────────────┐
//! │   PDF    │──▶│ Chunk + Embed     │──▶│ In-memory       │
//! │ loader  │   │ (Ollama embed)    │   │ vector store    │
//! └─────────┘   └──────────────────┘   └───────┬────────┘
//!                                              │ nearest chunks
//!                                              ▼
//!                          ┌──────────┐   ┌──────────┐
//!                          │ Analyze  │──▶│ Compose  │──▶ answer
//!                          │ agent    │   │ agent    │
//!                          └──────────┘   └──────────┘
//! ```
//!
//! The vector collection is process-local and rebuilt from empty on every
//! run. The two pipeline stages run strictly one after the other; each
//! external call (chat, embed, document load) blocks until it returns.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration with built-in defaults |
//! | [`models`] | Core data types |
//! | [`extract`] | PDF/plain-text document loading |
//! | [`chunk`] | Fixed-size overlapping chunker |
//! | [`embedding`] | Embedding provider abstraction (Ollama) |
//! | [`store`] | In-memory vector collection |
//! | [`index`] | Load → chunk → embed → upsert pipeline |
//! | [`retrieve`] | Nearest-chunk retrieval |
//! | [`compose`] | Prompt composition |
//! | [`agents`] | Declarative agent personas and tasks |
//! | [`llm`] | Chat model boundary (Ollama) |
//! | [`pipeline`] | Two-stage Analyze → Compose flow |
//! | [`context`] | Per-run application context |

pub mod agents;
pub mod chunk;
pub mod compose;
pub mod config;
pub mod context;
pub mod embedding;
mod error;
pub mod extract;
pub mod index;
pub mod llm;
pub mod models;
pub mod pipeline;
mod remote;
pub mod retrieve;
pub mod store;

pub use error::{Error, Result};
