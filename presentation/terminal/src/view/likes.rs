use std::collections::HashSet;

use business::domain::shared::value_objects::ProductId;

/// Heart toggles shown next to cart lines. Purely cosmetic, never touches the cart.
#[derive(Debug, Default)]
pub struct Likes {
    liked: HashSet<ProductId>,
}

impl Likes {
    /// Flips the like state and returns the new value.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        }
    }

    pub fn is_liked(&self, id: &ProductId) -> bool {
        self.liked.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_toggle_back_and_forth() {
        let mut likes = Likes::default();
        let id = ProductId::from(1u64);

        assert!(likes.toggle(&id));
        assert!(likes.is_liked(&id));
        assert!(!likes.toggle(&id));
        assert!(!likes.is_liked(&id));
    }
}
