//! Forms module - generates the HTML pages for the admin flows.
//!
//! Each page carries a message slot used to re-render the form after a
//! recoverable failure (password mismatch, invalid credentials). Messages
//! are HTML-escaped before interpolation.

/// Escape HTML special characters to prevent XSS attacks.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Wrap a form body in the shared page chrome.
fn page(title: &str, message: &str, body: &str) -> String {
    let escaped_title = html_escape(title);
    let message_block = if message.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="message">{}</p>"#, html_escape(message))
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{escaped_title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            max-width: 420px;
            margin: 48px auto;
            padding: 0 16px;
        }}
        label {{
            display: block;
            margin: 12px 0 4px;
        }}
        input {{
            width: 100%;
            padding: 6px;
            box-sizing: border-box;
        }}
        button {{
            margin-top: 16px;
            padding: 8px 20px;
        }}
        .message {{
            color: #b00020;
        }}
    </style>
</head>
<body>
    <h1>{escaped_title}</h1>
    {message_block}
    {body}
</body>
</html>
"##
    )
}

/// Render the admin signup form.
///
/// `message` is shown above the form; pass an empty string for the initial
/// GET render.
pub fn render_signup_form(message: &str) -> String {
    page(
        "Admin Signup",
        message,
        r#"<form method="POST" action="/admin_signup">
        <label for="username">Username</label>
        <input type="text" id="username" name="username" required>
        <label for="password">Password</label>
        <input type="password" id="password" name="password" required>
        <label for="confirm_password">Confirm password</label>
        <input type="password" id="confirm_password" name="confirm_password" required>
        <button type="submit">Sign up</button>
    </form>"#,
    )
}

/// Render the admin login form.
pub fn render_login_form(message: &str) -> String {
    page(
        "Admin Login",
        message,
        r#"<form method="POST" action="/admin_login">
        <label for="username">Username</label>
        <input type="text" id="username" name="username" required>
        <label for="password">Password</label>
        <input type="password" id="password" name="password" required>
        <button type="submit">Log in</button>
    </form>"#,
    )
}

/// Render the item upload form.
pub fn render_upload_form(message: &str) -> String {
    page(
        "Upload New Item",
        message,
        r#"<form method="POST" action="/upload_new_item" enctype="multipart/form-data">
        <label for="item_image">Item image</label>
        <input type="file" id="item_image" name="item_image" required>
        <label for="item_title">Title</label>
        <input type="text" id="item_title" name="item_title" required>
        <label for="price_with_ice_cream">Price with ice cream</label>
        <input type="text" id="price_with_ice_cream" name="price_with_ice_cream" required>
        <label for="price_without_ice_cream">Price without ice cream</label>
        <input type="text" id="price_without_ice_cream" name="price_without_ice_cream" required>
        <button type="submit">Upload</button>
    </form>"#,
    )
}

// =============================================================================
// Tests
// =============================================================================
