mod tests {
    use firefly_sync::{EventChannel, EventSink, FireflyEvent};

    #[test]
    fn test_fifo_order() {
        let channel = EventChannel::<4>::new();

        channel
            .try_send(FireflyEvent::Calibrated { threshold: 120 })
            .unwrap();
        channel.try_send(FireflyEvent::SelfFlash { hue: 168 }).unwrap();
        assert_eq!(channel.len(), 2);

        assert_eq!(
            channel.try_receive(),
            Some(FireflyEvent::Calibrated { threshold: 120 })
        );
        assert_eq!(channel.try_receive(), Some(FireflyEvent::SelfFlash { hue: 168 }));
        assert_eq!(channel.try_receive(), None);
    }

    #[test]
    fn test_full_channel() {
        let channel = EventChannel::<1>::new();
        let event = FireflyEvent::Daylight { light: 250 };
        assert_eq!(channel.try_send(event), Ok(()));
        assert_eq!(
            channel.try_send(FireflyEvent::SelfFlash { hue: 0 }),
            Err(FireflyEvent::SelfFlash { hue: 0 })
        );
    }

    #[test]
    fn test_sink_drops_when_full() {
        let channel = EventChannel::<2>::new();
        let mut sink = &channel;
        for hue in 0..5 {
            sink.publish(FireflyEvent::SelfFlash { hue });
        }
        assert_eq!(channel.len(), 2);
        assert_eq!(channel.try_receive(), Some(FireflyEvent::SelfFlash { hue: 0 }));
        assert_eq!(channel.try_receive(), Some(FireflyEvent::SelfFlash { hue: 1 }));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_unit_sink_discards() {
        EventSink::publish(&mut (), FireflyEvent::SelfFlash { hue: 0 });
    }
}
