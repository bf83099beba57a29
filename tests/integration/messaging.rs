use crate::support::IntegrationHarness;
use anyhow::Result;

#[test]
fn first_send_creates_one_conversation_with_zero_unread() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.logged_in_store();

    store.send_message("neighbor-1", "옆집사는이웃", None, "안녕하세요!")?;
    assert_eq!(store.conversations().len(), 1);
    let conversation = &store.conversations()[0];
    assert_eq!(conversation.recipient_id, "neighbor-1");
    assert_eq!(conversation.last_message, "안녕하세요!");
    assert_eq!(conversation.unread_count, 0);

    let messages = store.messages_with("neighbor-1");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_sent_by_me);
    Ok(())
}

#[test]
fn a_second_send_updates_the_summary_in_place() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.logged_in_store();

    store.send_message("neighbor-1", "옆집사는이웃", None, "안녕하세요!")?;
    let original_id = store.conversations()[0].id.clone();

    store.send_message("neighbor-1", "옆집사는이웃", None, "나눔 가능할까요?")?;
    assert_eq!(store.conversations().len(), 1);
    let conversation = &store.conversations()[0];
    assert_eq!(conversation.id, original_id);
    assert_eq!(conversation.last_message, "나눔 가능할까요?");
    assert_eq!(conversation.unread_count, 0);
    assert_eq!(store.messages_with("neighbor-1").len(), 2);
    Ok(())
}

#[test]
fn deleting_a_conversation_purges_its_messages() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.logged_in_store();

    store.send_message("neighbor-1", "옆집사는이웃", None, "안녕하세요!")?;
    store.send_message("neighbor-1", "옆집사는이웃", None, "계세요?")?;
    store.send_message("neighbor-2", "윗집사람", None, "소음 죄송해요")?;

    store.delete_conversation("neighbor-1")?;
    assert!(store.messages_with("neighbor-1").is_empty());
    assert_eq!(store.conversations().len(), 1);
    assert_eq!(store.conversations()[0].recipient_id, "neighbor-2");
    assert_eq!(store.messages_with("neighbor-2").len(), 1);
    Ok(())
}
