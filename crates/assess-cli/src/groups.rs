//! Learning target definitions supplied on the command line.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use assess_model::LearningTargetGroup;

/// Loads a JSON array of group definitions.
///
/// Every entry is validated on load; the first invalid one fails the file.
pub fn load_groups_file(path: &Path) -> Result<Vec<LearningTargetGroup>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read groups file: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse groups file: {}", path.display()))
}

/// Parses `NAME:Q1,Q2,...:MIN:MAX`.
///
/// The last two fields are split off from the right, then the name ends at
/// the first remaining `:`. Question names may therefore contain `:` but not `,`.
///
/// # Examples
///
/// ```
/// use assess_cli::groups::parse_group_spec;
///
/// let group = parse_group_spec("Causes of WWI:Q1,Q2,Q3:2:3").unwrap();
/// assert_eq!(group.name(), "Causes of WWI");
/// assert_eq!(group.questions(), ["Q1", "Q2", "Q3"]);
/// assert_eq!((group.min_correct(), group.max_correct()), (2, 3));
/// ```
pub fn parse_group_spec(spec: &str) -> Result<LearningTargetGroup> {
    let mut fields = spec.rsplitn(3, ':');
    let max = fields.next();
    let min = fields.next();
    let head = fields.next();
    let (Some(max), Some(min), Some(head)) = (max, min, head) else {
        return Err(anyhow!(
            "invalid group '{spec}': expected NAME:Q1,Q2,...:MIN:MAX"
        ));
    };
    let (name, questions) = head
        .split_once(':')
        .ok_or_else(|| anyhow!("invalid group '{spec}': expected NAME:Q1,Q2,...:MIN:MAX"))?;

    let min_correct: usize = min
        .trim()
        .parse()
        .with_context(|| format!("invalid minimum '{min}' in group '{spec}'"))?;
    let max_correct: usize = max
        .trim()
        .parse()
        .with_context(|| format!("invalid maximum '{max}' in group '{spec}'"))?;
    let questions = questions
        .split(',')
        .map(str::trim)
        .filter(|question| !question.is_empty());

    LearningTargetGroup::new(name, questions, min_correct, max_correct)
        .with_context(|| format!("invalid group '{spec}'"))
}

/// Groups from the file (if any) followed by inline specs, in order.
pub fn collect_groups(file: Option<&Path>, specs: &[String]) -> Result<Vec<LearningTargetGroup>> {
    let mut groups = match file {
        Some(path) => load_groups_file(path)?,
        None => Vec::new(),
    };
    for spec in specs {
        groups.push(parse_group_spec(spec)?);
    }
    Ok(groups)
}
