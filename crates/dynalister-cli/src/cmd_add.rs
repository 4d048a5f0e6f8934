use anyhow::{Context, Result};
use dynalister::{Backend, Dynalist, InboxItem};

pub fn run<B: Backend>(
    dynalist: &Dynalist<B>,
    words: &[String],
    note: Option<String>,
    checked: bool,
) -> Result<()> {
    let item = inbox_item(words, note, checked);
    dynalist
        .inbox_add(&item)
        .context("Failed to add item to inbox")?;
    tracing::info!(content = %item.content, "added to inbox");
    Ok(())
}

fn inbox_item(words: &[String], note: Option<String>, checked: bool) -> InboxItem {
    let mut item = InboxItem::new(words.join(" ")).with_checked(checked);
    if let Some(note) = note {
        item = item.with_note(note);
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_words_joined() {
        let item = inbox_item(&["buy".into(), "oat".into(), "milk".into()], None, false);
        assert_eq!(item.content, "buy oat milk");
        assert!(item.note.is_none());
    }

    #[test]
    fn test_add_reaches_backend() {
        let dynalist = Dynalist::new(testing::sample());
        run(&dynalist, &["call".into(), "Sam".into()], Some("re: lease".into()), true).unwrap();

        let inbox = dynalist.backend().inbox.borrow();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].content, "call Sam");
        assert_eq!(inbox[0].note.as_deref(), Some("re: lease"));
        assert!(inbox[0].checked);
    }
}
