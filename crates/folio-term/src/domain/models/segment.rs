/// One step of a render job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Typed out character by character, then followed by one line break.
    Line(String),
    /// Wipes the output surface at this point of the job.
    Clear,
}

impl Segment {
    pub fn line(text: impl Into<String>) -> Segment {
        return Segment::Line(text.into());
    }

    pub fn blank() -> Segment {
        return Segment::Line(String::new());
    }
}

/// Everything animated for one submission, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderJob {
    pub segments: Vec<Segment>,
}

impl RenderJob {
    pub fn new(segments: Vec<Segment>) -> RenderJob {
        return RenderJob { segments };
    }

    /// The lines of the job, ignoring clear markers.
    pub fn lines(&self) -> Vec<&str> {
        return self
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Line(text) => Some(text.as_str()),
                Segment::Clear => None,
            })
            .collect();
    }
}
