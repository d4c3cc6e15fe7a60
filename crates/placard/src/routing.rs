use std::path::Path;

use crate::errors::RouteError;
use crate::route::{PageParams, RouteType};

#[derive(Debug, PartialEq)]
pub struct ParameterDef {
    pub(crate) key: String,
    pub(crate) index: usize,
    pub(crate) length: usize,
}

pub fn extract_params_from_raw_route(raw_route: &str) -> Vec<ParameterDef> {
    let mut params = Vec::new();
    let mut start = 0;

    while let Some(bracket_pos) = raw_route[start..].find('[') {
        let abs_pos = start + bracket_pos;

        // Check if escaped by counting preceding backslashes
        let backslash_count = raw_route[..abs_pos]
            .chars()
            .rev()
            .take_while(|&c| c == '\\')
            .count();

        if backslash_count % 2 == 1 {
            start = abs_pos + 1;
            continue;
        }

        if let Some(end_bracket) = raw_route[abs_pos + 1..].find(']') {
            let end_pos = abs_pos + 1 + end_bracket;
            let key = raw_route[abs_pos + 1..end_pos].to_string();

            params.push(ParameterDef {
                key,
                index: abs_pos,
                length: end_pos - abs_pos + 1,
            });

            start = end_pos + 1;
        } else {
            break;
        }
    }

    params
}

pub fn get_route_type_from_route_params(params_def: &[ParameterDef]) -> RouteType {
    if params_def.is_empty() {
        RouteType::Static
    } else {
        RouteType::Dynamic
    }
}

pub fn guess_if_route_is_endpoint(raw_route: &str) -> bool {
    let real_path = Path::new(&raw_route);

    real_path.extension().is_some()
}

/// Splits a request path into its non-empty segments, so `/services`, `/services/` and `//services` are the same path.
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// One segment of a [`RoutePattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A parsed raw route, used to match request paths.
///
/// Parameters must span a whole segment: `/services/[service]` is valid, `/services/item-[id]` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw_route: &str) -> Result<Self, RouteError> {
        let mut segments = Vec::new();

        for segment in path_segments(raw_route) {
            let params_def = extract_params_from_raw_route(segment);

            if params_def.iter().any(|def| def.key.is_empty()) {
                return Err(RouteError::EmptyParameterName {
                    route: raw_route.to_string(),
                });
            }

            match params_def.as_slice() {
                [] => segments.push(Segment::Static(unescape_brackets(segment))),
                [def] if def.index == 0 && def.length == segment.len() => {
                    segments.push(Segment::Param(def.key.clone()))
                }
                _ => {
                    return Err(RouteError::PartialSegmentParameter {
                        route: raw_route.to_string(),
                        segment: segment.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            raw: raw_route.to_string(),
            segments,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn route_type(&self) -> RouteType {
        if self
            .segments
            .iter()
            .any(|segment| matches!(segment, Segment::Param(_)))
        {
            RouteType::Dynamic
        } else {
            RouteType::Static
        }
    }

    pub fn static_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Static(_)))
            .count()
    }

    /// Returns the captured parameters if `path` matches this pattern.
    ///
    /// A parameter captures exactly one non-empty segment, static segments compare exactly.
    pub fn matches(&self, path: &str) -> Option<PageParams> {
        let mut params = PageParams::default();
        let mut actual_segments = path_segments(path);

        for expected in &self.segments {
            let actual = actual_segments.next()?;

            match expected {
                Segment::Static(literal) => {
                    if literal != actual {
                        return None;
                    }
                }
                Segment::Param(key) => {
                    params.insert(key.clone(), actual.to_string());
                }
            }
        }

        if actual_segments.next().is_some() {
            return None;
        }

        Some(params)
    }
}

fn unescape_brackets(segment: &str) -> String {
    segment.replace("\\[", "[").replace("\\]", "]")
}
