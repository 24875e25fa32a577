mod text;

pub use self::text::*;
use crate::entity::UserName;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Review {
    name: UserName,
    text: ReviewText,
}

impl Review {
    pub fn new(name: UserName, text: ReviewText) -> Self {
        Self { name, text }
    }
}

/// Which transition an upsert performed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReviewOutcome {
    Created,
    Updated,
}

/// The reviews of a single book, holding at most one entry per user.
///
/// Entries keep the order in which they were first written. Updating a
/// review replaces its text without moving it; removing one leaves the
/// relative order of the rest untouched.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Reviews(Vec<Review>);

impl Reviews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, review: Review) -> ReviewOutcome {
        match self.position(review.name()) {
            Some(index) => {
                self.0[index].text = review.text;
                ReviewOutcome::Updated
            }
            None => {
                self.0.push(review);
                ReviewOutcome::Created
            }
        }
    }

    pub fn remove(&mut self, name: &UserName) -> Option<Review> {
        self.position(name).map(|index| self.0.remove(index))
    }

    pub fn find(&self, name: &UserName) -> Option<&Review> {
        self.0.iter().find(|review| review.name() == name)
    }

    /// The most recently created review still present.
    pub fn latest(&self) -> Option<&Review> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.0.iter()
    }

    fn position(&self, name: &UserName) -> Option<usize> {
        self.0.iter().position(|review| review.name() == name)
    }
}

// Duplicate names collapse into the first entry, carrying the last text.
impl FromIterator<Review> for Reviews {
    fn from_iter<I: IntoIterator<Item = Review>>(iter: I) -> Self {
        let mut reviews = Self::new();
        iter.into_iter().for_each(|review| {
            reviews.upsert(review);
        });
        reviews
    }
}

impl IntoIterator for Reviews {
    type Item = Review;
    type IntoIter = std::vec::IntoIter<Review>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Review, ReviewOutcome, ReviewText, Reviews, UserName};

    fn review(name: &str, text: &str) -> Review {
        Review::new(UserName::new(name), ReviewText::new(text))
    }

    fn names(reviews: &Reviews) -> Vec<&str> {
        reviews
            .iter()
            .map(|review| review.name().as_ref().as_str())
            .collect()
    }

    #[test]
    fn upsert_creates_then_updates_in_place() {
        let mut reviews = Reviews::new();
        assert_eq!(reviews.upsert(review("bob", "great")), ReviewOutcome::Created);
        assert_eq!(reviews.upsert(review("ann", "fine")), ReviewOutcome::Created);
        assert_eq!(reviews.upsert(review("bob", "meh")), ReviewOutcome::Updated);

        assert_eq!(reviews.len(), 2);
        assert_eq!(names(&reviews), vec!["bob", "ann"]);
        let bob = reviews.find(&UserName::new("bob")).map(|r| r.text().clone());
        assert_eq!(bob, Some(ReviewText::new("meh")));
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut reviews: Reviews = vec![review("a", "1"), review("b", "2"), review("c", "3")]
            .into_iter()
            .collect();

        let removed = reviews.remove(&UserName::new("b"));
        assert_eq!(removed, Some(review("b", "2")));
        assert_eq!(names(&reviews), vec!["a", "c"]);

        assert_eq!(reviews.remove(&UserName::new("b")), None);
        assert_eq!(reviews.len(), 2);
    }

    #[test]
    fn latest_is_last_created_and_ignores_updates() {
        let mut reviews = Reviews::new();
        assert!(reviews.latest().is_none());

        reviews.upsert(review("a", "1"));
        reviews.upsert(review("b", "2"));
        reviews.upsert(review("a", "edited"));
        assert_eq!(reviews.latest(), Some(&review("b", "2")));

        reviews.remove(&UserName::new("b"));
        assert_eq!(reviews.latest(), Some(&review("a", "edited")));
    }

    #[test]
    fn collect_collapses_duplicate_names() {
        let reviews: Reviews = vec![review("a", "first"), review("b", "x"), review("a", "second")]
            .into_iter()
            .collect();
        assert_eq!(reviews.len(), 2);
        assert_eq!(names(&reviews), vec!["a", "b"]);
        assert_eq!(reviews.find(&UserName::new("a")), Some(&review("a", "second")));
    }
}
