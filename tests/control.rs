mod tests {
    use strip_arcade::{ControlChannel, ControlIntent, TrySendError};

    #[test]
    fn test_intents_arrive_in_order() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.try_send(ControlIntent::SelectGame(3)).unwrap();
        sender.try_send(ControlIntent::Pause).unwrap();
        sender.try_send(ControlIntent::Resume).unwrap();

        assert_eq!(receiver.try_receive(), Some(ControlIntent::SelectGame(3)));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Pause));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Resume));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_empty_channel_yields_nothing() {
        let channel: ControlChannel<4> = ControlChannel::new();
        assert_eq!(channel.receiver().try_receive(), None);
    }

    #[test]
    fn test_full_queue_returns_the_intent() {
        let channel: ControlChannel<2> = ControlChannel::new();
        let sender = channel.sender();

        sender.try_send(ControlIntent::Pause).unwrap();
        sender.try_send(ControlIntent::Resume).unwrap();
        let rejected = sender.try_send(ControlIntent::SelectGame(1));
        assert_eq!(rejected, Err(TrySendError(ControlIntent::SelectGame(1))));

        // The queued intents are untouched by the failed send.
        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Pause));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Resume));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_drain_then_refill() {
        let channel: ControlChannel<2> = ControlChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.try_send(ControlIntent::Pause).unwrap();
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Pause));
        sender.try_send(ControlIntent::Resume).unwrap();
        sender.try_send(ControlIntent::SelectGame(0)).unwrap();
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Resume));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::SelectGame(0)));
    }

    #[test]
    fn test_handles_are_copyable() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let sender_too = sender;
        sender.try_send(ControlIntent::Pause).unwrap();
        sender_too.try_send(ControlIntent::Resume).unwrap();
        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Pause));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Resume));
    }
}
