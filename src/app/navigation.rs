//! Screen navigation for the [`App`].

use super::{App, Screen};

impl App {
    /// Move the gallery selection up.
    pub fn move_up(&mut self) {
        if self.gallery_index > 0 {
            self.gallery_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move the gallery selection down.
    pub fn move_down(&mut self) {
        if !self.styles.is_empty() && self.gallery_index < self.styles.len() - 1 {
            self.gallery_index += 1;
            self.mark_dirty();
        }
    }

    /// Open the currently selected gallery style.
    pub fn open_selected_style(&mut self) {
        if let Some(style) = self.styles.get(self.gallery_index).cloned() {
            self.open_style(style);
        }
    }

    /// Switch to the Style-detail screen for `style` and fetch its reviews
    /// and average in the background. The draft resets on entry; a fetch
    /// failure leaves the screen up with empty reviews and a zero average.
    pub fn open_style(&mut self, style: crate::models::Style) {
        let style_id = style.id.clone();
        self.selected = Some(style);
        self.screen = Screen::StyleDetail;
        self.reviews.clear();
        self.avg_rating = 0.0;
        self.draft_rating = 5;
        self.comment.clear();
        self.error = None;
        self.submit_in_flight = false;
        self.mark_dirty();

        self.spawn_detail_fetch(style_id);
    }

    /// Leave the Style-detail screen. Everything tied to the selection is
    /// dropped; re-entering the same style re-fetches.
    pub fn back_to_gallery(&mut self) {
        self.screen = Screen::Gallery;
        self.clear_selection();
        self.error = None;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{review, style, test_app};
    use super::*;

    #[tokio::test]
    async fn open_style_resets_draft_and_fetches_detail() {
        let (mut app, http, _) = test_app();
        http.set_json("http://api/styles/a", 200, r#"{"reviews":[],"avgRating":0}"#);
        app.draft_rating = 2;
        app.comment.insert_char('x');

        app.open_style(style("a", "Classic"));

        assert_eq!(app.screen, Screen::StyleDetail);
        assert_eq!(app.draft_rating, 5);
        assert!(app.comment.is_empty());
        assert!(app.selected.is_some());

        // The detail fetch is detached; give it a turn to run.
        tokio::task::yield_now().await;
        assert!(http
            .requests()
            .iter()
            .any(|r| r.url == "http://api/styles/a"));
    }

    #[tokio::test]
    async fn back_clears_selection_reviews_and_average() {
        let (mut app, _, _) = test_app();
        app.selected = Some(style("a", "Classic"));
        app.screen = Screen::StyleDetail;
        app.reviews.push(review("r", 4));
        app.avg_rating = 4.0;

        app.back_to_gallery();

        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.selected.is_none());
        assert!(app.reviews.is_empty());
        assert_eq!(app.avg_rating, 0.0);
    }

    #[tokio::test]
    async fn gallery_selection_stays_in_bounds() {
        let (mut app, _, _) = test_app();
        app.styles = vec![style("a", "One"), style("b", "Two")];

        app.move_up();
        assert_eq!(app.gallery_index, 0);
        app.move_down();
        assert_eq!(app.gallery_index, 1);
        app.move_down();
        assert_eq!(app.gallery_index, 1);
    }
}
