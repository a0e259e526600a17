use super::{error_banner, escape_html, layout};

pub fn signup_page(current_username: Option<&str>, username: &str, error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Sign Up</h1>
  {error}
  <form method="POST" action="/signup">
    <label for="username">Username</label>
    <input type="text" id="username" name="username" value="{username}" required autocomplete="username">
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required autocomplete="new-password">
    <button type="submit">Sign Up</button>
  </form>"#,
        error = error_banner(error),
        username = escape_html(username),
    );
    layout("Sign Up", current_username, &body)
}

/// Login form
///
/// Someone already logged in only reaches this page through a failed
/// re-login, which is worded as switching accounts.
pub fn login_page(current_username: Option<&str>, username: &str, error: Option<&str>) -> String {
    let heading = match current_username {
        Some(_) => "Switch Account",
        None => "Log In",
    };
    let body = format!(
        r#"<h1>{heading}</h1>
  {error}
  <form method="POST" action="/login">
    <label for="username">Username</label>
    <input type="text" id="username" name="username" value="{username}" required autocomplete="username">
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required autocomplete="current-password">
    <button type="submit">{heading}</button>
  </form>
  <p>No account? <a href="/signup">Sign Up</a></p>"#,
        error = error_banner(error),
        username = escape_html(username),
    );
    layout(heading, current_username, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_password_message_is_entity_escaped() {
        let html = login_page(None, "test", Some("Password doesn't match. Please try again."));
        assert!(html.contains("Password doesn&#39;t match. Please try again."));
    }

    #[test]
    fn login_page_for_logged_in_user_avoids_log_in_text() {
        let html = login_page(Some("test"), "test", Some("Password doesn't match. Please try again."));
        assert!(html.contains("You are logged in as test"));
        assert!(html.contains("Switch Account"));
        assert!(!html.contains("Log In"));
    }

    #[test]
    fn signup_form_keeps_entered_username() {
        let html = signup_page(None, "me1", Some("That username is taken."));
        assert!(html.contains(r#"value="me1""#));
        assert!(html.contains("That username is taken."));
    }
}
