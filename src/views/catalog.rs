use super::{error_banner, escape_html, layout, profile_href};
use crate::db::models::{Audience, Author, BookListing, User};

/// Values entered into the create-book form, echoed back on errors
#[derive(Debug, Default, Clone)]
pub struct BookFormValues<'a> {
    pub title: &'a str,
    pub publish_date: &'a str,
    pub author_id: &'a str,
    pub audience: &'a str,
}

pub fn home_page(current_username: Option<&str>, books: &[BookListing], users: &[User]) -> String {
    let book_items = if books.is_empty() {
        "<li>No books yet.</li>".to_string()
    } else {
        books.iter().map(book_item).collect::<Vec<_>>().join("\n    ")
    };

    let user_items = users
        .iter()
        .map(|u| {
            format!(
                r#"<li><a href="{href}">{name}</a></li>"#,
                href = profile_href(&u.username),
                name = escape_html(&u.username)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    let body = format!(
        r#"<h1>All Books</h1>
  <ul class="books">
    {book_items}
  </ul>
  <h2>All Users</h2>
  <ul class="users">
    {user_items}
  </ul>"#
    );
    layout("Home", current_username, &body)
}

pub fn book_detail_page(current_username: Option<&str>, book: &BookListing) -> String {
    let published = book
        .publish_date
        .as_deref()
        .map(|d| format!("<p>Published {}</p>", escape_html(d)))
        .unwrap_or_default();
    let added_by = book
        .created_by
        .as_deref()
        .map(|u| {
            format!(
                r#"<p>Added by <a href="{href}">{name}</a></p>"#,
                href = profile_href(u),
                name = escape_html(u)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<h1>{title}</h1>
  <p>Written by {author}</p>
  {published}
  <p>Audience: {audience}</p>
  {added_by}"#,
        title = escape_html(&book.title),
        author = escape_html(&book.author_name),
        audience = book.audience,
    );
    layout(&book.title, current_username, &body)
}

pub fn profile_page(current_username: Option<&str>, user: &User, books: &[BookListing]) -> String {
    let items = if books.is_empty() {
        "<li>No books added yet.</li>".to_string()
    } else {
        books.iter().map(book_item).collect::<Vec<_>>().join("\n    ")
    };

    let body = format!(
        r#"<h1>{name}</h1>
  <h2>Books added</h2>
  <ul class="books">
    {items}
  </ul>"#,
        name = escape_html(&user.username),
    );
    layout(&user.username, current_username, &body)
}

pub fn create_author_page(current_username: Option<&str>, name: &str, biography: &str, error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Create Author</h1>
  {error}
  <form method="POST" action="/create_author">
    <label for="name">Name</label>
    <input type="text" id="name" name="name" value="{name}" required>
    <label for="biography">Biography</label>
    <textarea id="biography" name="biography">{biography}</textarea>
    <button type="submit">Create Author</button>
  </form>"#,
        error = error_banner(error),
        name = escape_html(name),
        biography = escape_html(biography),
    );
    layout("Create Author", current_username, &body)
}

pub fn create_book_page(
    current_username: Option<&str>,
    authors: &[Author],
    values: &BookFormValues<'_>,
    error: Option<&str>,
) -> String {
    let author_options = authors
        .iter()
        .map(|a| {
            format!(
                r#"<option value="{id}"{selected}>{name}</option>"#,
                id = escape_html(&a.id),
                selected = if a.id == values.author_id { " selected" } else { "" },
                name = escape_html(&a.name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let selected_audience = if values.audience.is_empty() {
        Audience::default().as_str()
    } else {
        values.audience
    };
    let audience_options = Audience::VARIANTS
        .iter()
        .map(|a| {
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = a.as_str(),
                selected = if a.as_str() == selected_audience { " selected" } else { "" },
                label = a.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let body = format!(
        r#"<h1>Create Book</h1>
  {error}
  <form method="POST" action="/create_book">
    <label for="title">Title</label>
    <input type="text" id="title" name="title" value="{title}" required>
    <label for="publish_date">Publish date</label>
    <input type="date" id="publish_date" name="publish_date" value="{publish_date}">
    <label for="author_id">Author</label>
    <select id="author_id" name="author_id">
      <option value="">Choose an author</option>
      {author_options}
    </select>
    <label for="audience">Audience</label>
    <select id="audience" name="audience">
      {audience_options}
    </select>
    <button type="submit">Create Book</button>
  </form>
  <p><a href="/create_author">Add a new author</a></p>"#,
        error = error_banner(error),
        title = escape_html(values.title),
        publish_date = escape_html(values.publish_date),
    );
    layout("Create Book", current_username, &body)
}

fn book_item(book: &BookListing) -> String {
    format!(
        r#"<li><a href="/book/{id}">{title}</a> by {author}</li>"#,
        id = escape_html(&book.id),
        title = escape_html(&book.title),
        author = escape_html(&book.author_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str) -> BookListing {
        BookListing {
            id: "b1".to_string(),
            title: title.to_string(),
            publish_date: Some("1960-07-11".to_string()),
            audience: Audience::All,
            author_id: "a1".to_string(),
            author_name: "Harper Lee".to_string(),
            created_by: Some("me1".to_string()),
        }
    }

    #[test]
    fn home_lists_books_with_authors() {
        let html = home_page(None, &[listing("To Kill a Mockingbird")], &[]);
        assert!(html.contains(r#"<a href="/book/b1">To Kill a Mockingbird</a> by Harper Lee"#));
    }

    #[test]
    fn user_links_are_percent_encoded() {
        let user = User::new("me/1".to_string(), "hash".to_string());
        let html = home_page(None, &[], &[user]);
        assert!(html.contains(r#"<a href="/profile/me%2F1">me/1</a>"#));
    }

    #[test]
    fn empty_home_says_so() {
        let html = home_page(None, &[], &[]);
        assert!(html.contains("No books yet."));
    }

    #[test]
    fn book_titles_are_escaped() {
        let html = book_detail_page(None, &listing("<i>Bold</i>"));
        assert!(html.contains("&lt;i&gt;Bold&lt;/i&gt;"));
        assert!(!html.contains("<i>Bold</i>"));
    }

    #[test]
    fn create_book_defaults_audience_to_all() {
        let html = create_book_page(Some("me1"), &[], &BookFormValues::default(), None);
        assert!(html.contains(r#"<option value="ALL" selected>All</option>"#));
    }
}
