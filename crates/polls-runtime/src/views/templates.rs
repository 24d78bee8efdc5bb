//! Server-side HTML rendering.
//!
//! Every piece of user-supplied text goes through [`escape_html`].

use polls_core::{Question, QuestionId};

/// Message rendered when the index has nothing to show.
pub const EMPTY_INDEX_MESSAGE: &str = "No polls are available.";

/// Site title used where no configured one is at hand.
pub const DEFAULT_SITE: &str = "polls";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Path of a question's detail page.
pub fn detail_path(id: QuestionId) -> String {
    format!("/polls/{}/", id)
}

/// Path of a question's results page.
pub fn results_path(id: QuestionId) -> String {
    format!("/polls/{}/results/", id)
}

/// Path the vote form posts to.
pub fn vote_path(id: QuestionId) -> String {
    format!("/polls/{}/vote/", id)
}

fn base_template(site: &str, title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {site}</title>
</head>
<body>
    <main>
{content}
    </main>
</body>
</html>"#,
        site = escape_html(site),
        title = escape_html(title),
        content = content,
    )
}

/// Index page listing the given questions, or the empty-state message.
pub fn index_page(site: &str, questions: &[Question]) -> String {
    let content = if questions.is_empty() {
        format!("        <p>{}</p>", EMPTY_INDEX_MESSAGE)
    } else {
        let items: String = questions
            .iter()
            .map(|q| {
                format!(
                    "            <li><a href=\"{}\">{}</a></li>\n",
                    detail_path(q.id),
                    escape_html(&q.text)
                )
            })
            .collect();
        format!("        <ul>\n{}        </ul>", items)
    };
    base_template(site, "Latest polls", &content)
}

/// Detail page with the vote form. `error` is shown above the choices.
pub fn detail_page(site: &str, question: &Question, error: Option<&str>) -> String {
    let error = error
        .map(|msg| format!("            <p><strong>{}</strong></p>\n", escape_html(msg)))
        .unwrap_or_default();
    let choices: String = question
        .choices
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "            <input type=\"radio\" name=\"choice\" id=\"choice{n}\" value=\"{id}\">\n            <label for=\"choice{n}\">{text}</label><br>\n",
                n = i + 1,
                id = c.id,
                text = escape_html(&c.text),
            )
        })
        .collect();
    let content = format!(
        r#"        <form action="{action}" method="post">
        <fieldset>
            <legend><h1>{text}</h1></legend>
{error}{choices}        </fieldset>
        <input type="submit" value="Vote">
        </form>"#,
        action = vote_path(question.id),
        text = escape_html(&question.text),
        error = error,
        choices = choices,
    );
    base_template(site, &question.text, &content)
}

/// Results page with per-choice vote counts.
pub fn results_page(site: &str, question: &Question) -> String {
    let rows: String = question
        .choices
        .iter()
        .map(|c| {
            format!(
                "            <li>{} -- {} vote{}</li>\n",
                escape_html(&c.text),
                c.votes,
                if c.votes == 1 { "" } else { "s" }
            )
        })
        .collect();
    let content = format!(
        "        <h1>{text}</h1>\n        <ul>\n{rows}        </ul>\n        <a href=\"{again}\">Vote again?</a>",
        text = escape_html(&question.text),
        rows = rows,
        again = detail_path(question.id),
    );
    base_template(site, &question.text, &content)
}

/// Generic not-found page. Says nothing about whether the poll exists.
pub fn not_found_page() -> String {
    base_template(
        DEFAULT_SITE,
        "Not found",
        "        <h1>Not Found</h1>\n        <p>No poll matches the given query.</p>",
    )
}

/// Generic error page.
pub fn error_page() -> String {
    base_template(
        DEFAULT_SITE,
        "Server error",
        "        <h1>Server Error</h1>\n        <p>Something went wrong.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use polls_core::{Choice, ChoiceId};

    fn question() -> Question {
        Question {
            id: QuestionId(3),
            text: "Tabs <or> spaces?".to_string(),
            pub_date: Utc::now(),
            choices: vec![
                Choice {
                    id: ChoiceId(7),
                    question_id: QuestionId(3),
                    text: "Tabs".to_string(),
                    votes: 1,
                },
                Choice {
                    id: ChoiceId(8),
                    question_id: QuestionId(3),
                    text: "Spaces".to_string(),
                    votes: 2,
                },
            ],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(detail_path(QuestionId(3)), "/polls/3/");
        assert_eq!(results_path(QuestionId(3)), "/polls/3/results/");
        assert_eq!(vote_path(QuestionId(3)), "/polls/3/vote/");
    }

    #[test]
    fn test_index_empty() {
        let html = index_page("polls", &[]);
        assert!(html.contains(EMPTY_INDEX_MESSAGE));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_index_links_and_escapes() {
        let html = index_page("polls", &[question()]);
        assert!(html.contains(r#"<a href="/polls/3/">Tabs &lt;or&gt; spaces?</a>"#));
        assert!(!html.contains(EMPTY_INDEX_MESSAGE));
    }

    #[test]
    fn test_detail_form() {
        let html = detail_page("polls", &question(), None);
        assert!(html.contains(r#"action="/polls/3/vote/""#));
        assert!(html.contains(r#"value="7""#));
        assert!(html.contains(r#"<label for="choice2">Spaces</label>"#));
        assert!(!html.contains("<strong>"));

        let html = detail_page("polls", &question(), Some("You didn't select a choice."));
        assert!(html.contains("<strong>You didn&#x27;t select a choice.</strong>"));
    }

    #[test]
    fn test_results_pluralizes() {
        let html = results_page("polls", &question());
        assert!(html.contains("Tabs -- 1 vote</li>"));
        assert!(html.contains("Spaces -- 2 votes</li>"));
        assert!(html.contains(r#"<a href="/polls/3/">Vote again?</a>"#));
    }
}
