//! Server-rendered HTML pages.

use photoboard_core::domain::Post;

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(text: &Option<String>) -> String {
    text.as_deref().map(escape).unwrap_or_default()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">Home</a> | <a href="/contact_us">Contact Us</a> | <a href="/posts">Posts</a> | <a href="/posts/new">New Post</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// `GET /`
pub fn welcome(username: Option<&str>) -> String {
    let body = match username {
        Some(name) => format!(
            r#"<h1>Welcome, {}!</h1>
<form action="/sign_out" method="POST"><button type="submit">Sign Out</button></form>"#,
            escape(name)
        ),
        None => r#"<h1>Welcome!</h1>
<form action="/sign_in" method="POST">
<label for="username">Username</label>
<input id="username" name="username" type="text">
<button type="submit">Sign In</button>
</form>"#
            .to_string(),
    };
    layout("Welcome", &body)
}

/// `GET /contact_us`
pub fn contact_us(full_name: Option<&str>, message: Option<&str>, things: &[String]) -> String {
    let mut body = String::from(
        r#"<h1>Contact Us</h1>
<form action="/contact_us" method="GET">
<input name="fullName" type="text" placeholder="Full name">
<textarea name="message" placeholder="Message"></textarea>
<input name="things" type="text" placeholder="Comma separated things">
<button type="submit">Send</button>
</form>"#,
    );

    if let Some(name) = full_name {
        body.push_str(&format!(
            "\n<section class=\"thanks\"><p>Thank you, {}!</p><blockquote>{}</blockquote></section>",
            escape(name),
            message.map(escape).unwrap_or_default()
        ));
    }

    if !things.is_empty() {
        body.push_str("\n<ul class=\"things\">");
        for thing in things {
            body.push_str(&format!("<li>{}</li>", escape(thing)));
        }
        body.push_str("</ul>");
    }

    layout("Contact Us", &body)
}

/// `GET /posts/new`
pub fn new_post() -> String {
    layout(
        "New Post",
        r#"<h1>New Post</h1>
<form action="/posts" method="POST">
<label for="pictureUrl">Picture URL</label>
<input id="pictureUrl" name="pictureUrl" type="text">
<label for="description">Description</label>
<textarea id="description" name="description"></textarea>
<button type="submit">Post</button>
</form>"#,
    )
}

fn post_card(post: &Post) -> String {
    format!(
        r#"<article class="post">
<a href="/posts/{id}"><img src="{picture}" alt="{description}"></a>
<p>{description}</p>
<small>by {username} on {created_at}</small>
</article>"#,
        id = post.id,
        picture = opt(&post.picture_url),
        description = opt(&post.description),
        username = post
            .username
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| "anonymous".to_string()),
        created_at = post.created_at.format("%Y-%m-%d %H:%M"),
    )
}

/// `GET /posts`
pub fn posts_index(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Posts</h1>\n");
    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>");
    }
    for post in posts {
        body.push_str(&post_card(post));
        body.push('\n');
    }
    layout("Posts", &body)
}

/// `GET /posts/{id}`
pub fn post_show(post: &Post) -> String {
    layout(&format!("Post #{}", post.id), &post_card(post))
}

/// `GET /posts/{id}` with no matching row.
pub fn post_not_found(id: i32) -> String {
    layout(
        "Post not found",
        &format!("<h1>Post not found</h1>\n<p>There is no post #{id}.</p>"),
    )
}
