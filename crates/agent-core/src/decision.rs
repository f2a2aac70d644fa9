//! Response Classification
//!
//! Maps raw model text onto a structured decision. The model is
//! instructed to answer in one of three formats; anything that matches
//! none of them is `Malformed` rather than an error, so a sloppy
//! response costs a pass instead of the run.
//!
//! The entire free-text grammar is confined to [`classify`]. Swapping it
//! for a stricter delimited protocol later means replacing this one
//! function; the loop only ever sees [`Decision`] values.

/// Marker opening a terminal answer.
pub const FINAL_ANSWER_MARKER: &str = "FINAL ANSWER:";

/// Exact response given when no tool can help.
pub const CANNOT_ANSWER_MARKER: &str = "FINAL: CANNOT ANSWER";

/// Marker opening a tool invocation request.
pub const USE_MARKER: &str = "USE:";

/// One classified model response. Exactly one variant applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The model answered; carries the full response text.
    FinalAnswer(String),

    /// The model decided no available tool can achieve the objective.
    CannotAnswer,

    /// The model wants a tool run with the given parameter text.
    ToolInvocation {
        /// Requested tool name, matched against the registry.
        tool: String,
        /// Everything after the first `:`, untrimmed.
        parameter: String,
    },

    /// The response matched no recognized format; carries the full text.
    Malformed(String),
}

/// Classify one raw model response.
///
/// Formats are checked in order: the `FINAL ANSWER:` prefix, the exact
/// `FINAL: CANNOT ANSWER` line, then the `USE:` prefix. For a tool
/// request the text after the first `:` is split on single spaces and
/// the second token is the name (the first is the empty string left of
/// the separating space); the parameter is that whole remainder. A
/// `USE:` response with no second token carries too little to dispatch
/// and is classified `Malformed`.
pub fn classify(response: &str) -> Decision {
    if response.starts_with(FINAL_ANSWER_MARKER) {
        return Decision::FinalAnswer(response.to_string());
    }

    if response == CANNOT_ANSWER_MARKER {
        return Decision::CannotAnswer;
    }

    if response.starts_with(USE_MARKER) {
        // "USE: searchArxiv with keyword X" -> tool "searchArxiv",
        // parameter " searchArxiv with keyword X"
        let rest = &response[USE_MARKER.len()..];
        return match rest.split(' ').nth(1) {
            Some(name) => Decision::ToolInvocation {
                tool: name.to_string(),
                parameter: rest.to_string(),
            },
            None => Decision::Malformed(response.to_string()),
        };
    }

    Decision::Malformed(response.to_string())
}
