#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeLayoutError {
    /// No visible surface with center gravity was found during layout.
    MissingCenter { visible_surfaces: usize },
}

impl std::fmt::Display for SwipeLayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeLayoutError::MissingCenter { visible_surfaces } => write!(
                f,
                "swipe layout needs a center surface; found {visible_surfaces} visible surfaces without one"
            ),
        }
    }
}

impl std::error::Error for SwipeLayoutError {}
