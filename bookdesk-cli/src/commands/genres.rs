//! Genres command implementation

use bookdesk_core::model::Genre;

/// Print every genre a book may have
pub fn genres() {
    for genre in Genre::ALL {
        println!("{}", genre);
    }
}
