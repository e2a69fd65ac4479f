//! Fixed page payload: stylesheet, script and the discussion scaffold.

pub const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Space+Mono:wght@400;700&family=Crimson+Pro:wght@300;400;600;700&display=swap";

pub const STYLES: &str = include_str!("../../assets/wiki.css");

/// Back-to-top button and smooth scrolling for in-page links.
pub const SCRIPT: &str = include_str!("../../assets/wiki.js");

/// Comment form and an empty thread container filled in client-side.
pub const DISCUSSION: &str = r#"<section class="discussion" id="discussion">
<div class="discussion-title">Discussion</div>
<form class="discussion-form">
<textarea name="comment" placeholder="Ask a question or share a correction"></textarea>
<button type="button">Post</button>
</form>
<div class="discussion-thread" id="discussionThread"></div>
</section>"#;

pub const BACK_TO_TOP: &str = r#"<div class="back-to-top" id="backToTop"></div>"#;
