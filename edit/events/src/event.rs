/*!
    Editorial event records.
*/

use chrono::{DateTime, Utc};

use edit_timecode::{RangeError, Timecode};

/**
    A single editorial event: a span of program material with its source
    marks and identifying metadata.

    Events pair a record position (`start..end` on the program timeline)
    with source marks (`mark_in..mark_out` on the source material). The
    timecodes involved may run at different frame rates; duration and
    containment checks reconcile rates the same way timecode arithmetic
    does.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct EditEvent {
    /// Human-readable event name, if any.
    pub name: Option<String>,
    /// Track assignment, e.g. `"VA1A2"` for video plus two audio channels.
    pub tracks: String,
    /// Record in point on the program timeline.
    pub start: Timecode,
    /// Record out point on the program timeline (exclusive).
    pub end: Timecode,
    /// Source in point.
    pub mark_in: Timecode,
    /// Source out point (exclusive).
    pub mark_out: Timecode,
    /// Source tape or reel identifier.
    pub tape: Option<String>,
    /// Scene identifier.
    pub scene: Option<String>,
    /// DPX frame-sequence identifier.
    pub dpx: Option<String>,
    /// Free-form comment.
    pub comment: Option<String>,
    /// When this event record was created.
    pub created_at: DateTime<Utc>,
}

impl EditEvent {
    /**
        Create an event for the given record span.

        Source marks start at the default timecode, metadata fields at
        `None`, and tracks at `"VA1A2"`.
    */
    pub fn new(start: Timecode, end: Timecode) -> Self {
        Self {
            name: None,
            tracks: "VA1A2".to_owned(),
            start,
            end,
            mark_in: Timecode::default(),
            mark_out: Timecode::default(),
            tape: None,
            scene: None,
            dpx: None,
            comment: None,
            created_at: Utc::now(),
        }
    }

    /**
        Record duration, `end - start`, at `end`'s frame rate.

        Fails with [`RangeError::Underflow`] when the event ends before
        it starts.
    */
    pub fn duration(&self) -> Result<Timecode, RangeError> {
        self.end.checked_sub(self.start)
    }

    /**
        Source duration, `mark_out - mark_in`, at `mark_out`'s frame rate.

        Fails with [`RangeError::Underflow`] when the marks are inverted.
    */
    pub fn marked_duration(&self) -> Result<Timecode, RangeError> {
        self.mark_out.checked_sub(self.mark_in)
    }

    /**
        Whether `timecode` falls within the record span — `start`
        inclusive, `end` exclusive. Differing frame rates are compared
        exactly, by position in time.
    */
    pub fn contains(&self, timecode: Timecode) -> bool {
        self.start <= timecode && timecode < self.end
    }
}

impl Default for EditEvent {
    fn default() -> Self {
        Self::new(Timecode::default(), Timecode::default())
    }
}
