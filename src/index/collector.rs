//! The buffering collector stage.
//!
//! A two-phase stream transform: during collection every incoming document
//! is buffered and forwarded downstream unchanged; on finish the buffered
//! batch is aggregated into a sorted tag list, paginated, and one index
//! document per page is rendered and emitted after the originals.
//!
//! The stage is an explicit state machine:
//!
//! ```text
//! Collecting --finish()--> Flushing --all pages emitted--> Done
//! ```
//!
//! One collector instance serves exactly one run; the buffer is never
//! shared or reused. The renderer and the index options are injected, the
//! stage performs no ambient lookups.

use crate::document::Document;
use crate::index::aggregate::aggregate_tags;
use crate::index::links::{build_links, build_pagination_links};
use crate::index::paginate::paginate;
use crate::log;
use crate::pipeline::sink::{DocumentSink, SinkError};
use crate::render::{PageContext, Render};
use thiserror::Error;

/// Collector stage errors
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("document written to a collector that already finished")]
    WriteAfterFinish,

    #[error("collector finished twice")]
    AlreadyFinished,

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Stage lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Collecting,
    Flushing,
    Done,
}

/// Task-level options for index generation.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Tags per page; 0 means the paginator default
    pub per_page: usize,
    /// URL pattern with a `:num` placeholder, e.g. `tags/index-:num.html`
    pub url_pattern: String,
}

/// The two-phase collector stage.
///
/// Generic over the injected renderer and the downstream sink so tests can
/// run fully in memory.
pub struct Collector<R: Render, S: DocumentSink> {
    state: State,
    buffer: Vec<Document>,
    renderer: R,
    sink: S,
    opts: IndexOptions,
}

impl<R: Render, S: DocumentSink> Collector<R, S> {
    /// Create a fresh stage with an empty buffer.
    pub fn new(renderer: R, sink: S, opts: IndexOptions) -> Self {
        Self {
            state: State::Collecting,
            buffer: Vec::new(),
            renderer,
            sink,
            opts,
        }
    }

    /// Accept one document: buffer a copy and forward it downstream
    /// unchanged.
    pub fn write(&mut self, doc: Document) -> Result<(), CollectError> {
        if self.state != State::Collecting {
            return Err(CollectError::WriteAfterFinish);
        }
        self.buffer.push(doc.clone());
        self.sink.push(doc)?;
        Ok(())
    }

    /// End of input: aggregate, paginate, render and emit index pages.
    ///
    /// Pages render strictly one at a time, in ascending page order, so
    /// generated paths stay deterministic. A render failure is logged and
    /// skips that page only; the remaining pages still render. Returns the
    /// number of index documents emitted.
    pub async fn finish(&mut self) -> Result<usize, CollectError> {
        if self.state != State::Collecting {
            return Err(CollectError::AlreadyFinished);
        }
        self.state = State::Flushing;

        let mut tags = aggregate_tags(&self.buffer);
        tags.sort();

        let mut emitted = 0;
        for page in paginate(&tags, self.opts.per_page) {
            let ctx = PageContext {
                tags: build_links(&page.items, &self.buffer),
                pagination: build_pagination_links(&page, &self.opts.url_pattern),
            };

            match self.renderer.render(&ctx).await {
                Ok(contents) => {
                    self.sink.push(Document {
                        path: ctx.pagination.url.clone(),
                        contents,
                        data: Default::default(),
                    })?;
                    emitted += 1;
                }
                Err(err) => {
                    log!("error"; "render failed for page {}: {err}", page.num);
                }
            }
        }

        self.state = State::Done;
        Ok(emitted)
    }

    /// Hand back the downstream sink once the run is over.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
