mod tests {
    use embassy_time::{Duration, Instant};
    use strip_arcade::color::{Rgb, colors};
    use strip_arcade::{
        ControlChannel, ControlIntent, GameId, GameState, InputSource, MemoryStore,
        NullStatusSink, OutputDriver, RawInput, Runtime, RuntimeConfig, StatusReport, StatusSink,
    };

    const N: usize = 10;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn at(v: u64) -> Instant {
        Instant::from_millis(v)
    }

    fn config(frame_ms: u64) -> RuntimeConfig {
        RuntimeConfig {
            frame_duration: ms(frame_ms),
            ..RuntimeConfig::default()
        }
    }

    /// Input source replaying a fixed script, one sample per frame.
    /// Past the end it reports all buttons released.
    struct ScriptedInput {
        script: Vec<RawInput>,
        cursor: usize,
    }

    impl ScriptedInput {
        fn new(script: Vec<RawInput>) -> Self {
            Self { script, cursor: 0 }
        }

        fn idle() -> Self {
            Self::new(Vec::new())
        }
    }

    impl InputSource for ScriptedInput {
        fn sample_raw(&mut self) -> RawInput {
            let raw = self.script.get(self.cursor).copied().unwrap_or_default();
            self.cursor += 1;
            raw
        }
    }

    /// Output driver keeping the last flushed frame and a frame count.
    struct CaptureOutput<const M: usize> {
        last: [Rgb; M],
        frames: u32,
    }

    impl<const M: usize> CaptureOutput<M> {
        fn new() -> Self {
            Self {
                last: [colors::BLACK; M],
                frames: 0,
            }
        }
    }

    impl<const M: usize> OutputDriver for CaptureOutput<M> {
        fn write(&mut self, cells: &[Rgb]) {
            self.last.copy_from_slice(cells);
            self.frames += 1;
        }
    }

    /// Sink recording every published report.
    struct RecordingSink {
        published: u32,
        states: Vec<GameState>,
        last_name: &'static str,
        last_score: u32,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                published: 0,
                states: Vec::new(),
                last_name: "",
                last_score: 0,
            }
        }
    }

    impl StatusSink for RecordingSink {
        fn publish(&mut self, report: &StatusReport<'_>) {
            self.published += 1;
            self.states.push(report.state);
            self.last_name = report.game_name;
            self.last_score = report.score;
        }
    }

    #[test]
    fn test_frame_pacing_follows_the_grid() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
            &config(10),
            ScriptedInput::idle(),
            CaptureOutput::<N>::new(),
            MemoryStore::new(0),
            NullStatusSink,
            channel.receiver(),
            1,
        );

        let first = runtime.tick(at(0));
        assert_eq!(first.next_deadline, at(10));
        assert_eq!(first.sleep_duration, ms(10));

        // An early frame keeps the established grid.
        let second = runtime.tick(at(4));
        assert_eq!(second.next_deadline, at(20));
        assert_eq!(second.sleep_duration, ms(16));

        // A long stall re-anchors the grid at now instead of
        // fast-forwarding through every missed deadline.
        let third = runtime.tick(at(500));
        assert_eq!(third.next_deadline, at(510));
        assert_eq!(third.sleep_duration, ms(10));
    }

    #[test]
    fn test_select_intent_switches_and_persists() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let mut store = MemoryStore::new(0);
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &config(10),
                ScriptedInput::idle(),
                CaptureOutput::<N>::new(),
                &mut store,
                NullStatusSink,
                channel.receiver(),
                1,
            );
            sender.try_send(ControlIntent::SelectGame(5)).unwrap();
            runtime.tick(at(0));
            assert_eq!(runtime.selector().active_id(), GameId::Pong);
            assert_eq!(runtime.selector().game_name(), "Pong");
        }
        assert_eq!(store.value(), 5);
    }

    #[test]
    fn test_unknown_select_is_dropped() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let mut store = MemoryStore::new(0);
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &config(10),
                ScriptedInput::idle(),
                CaptureOutput::<N>::new(),
                &mut store,
                NullStatusSink,
                channel.receiver(),
                1,
            );
            sender.try_send(ControlIntent::SelectGame(99)).unwrap();
            runtime.tick(at(0));
            assert_eq!(runtime.selector().active_id(), GameId::Test);
        }
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_pause_freezes_ticks_and_resume_releases() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let mut sink = RecordingSink::new();
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &config(10),
                ScriptedInput::idle(),
                CaptureOutput::<N>::new(),
                MemoryStore::new(0),
                &mut sink,
                channel.receiver(),
                1,
            );
            sender.try_send(ControlIntent::Pause).unwrap();
            runtime.tick(at(0));
            assert!(runtime.is_paused());

            sender.try_send(ControlIntent::Resume).unwrap();
            runtime.tick(at(10));
            assert!(!runtime.is_paused());
        }
        // The sink saw the pause override even though the game itself
        // never left Playing.
        assert_eq!(sink.published, 2);
        assert_eq!(sink.states, vec![GameState::Paused, GameState::Playing]);
        assert_eq!(sink.last_name, "Test");
    }

    #[test]
    fn test_brightness_scales_only_the_flushed_copy() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut output = CaptureOutput::<N>::new();
        let cfg = RuntimeConfig {
            frame_duration: ms(10),
            brightness: 128,
            ..RuntimeConfig::default()
        };
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &cfg,
                ScriptedInput::idle(),
                &mut output,
                MemoryStore::new(0),
                NullStatusSink,
                channel.receiver(),
                1,
            );
            runtime.tick(at(0));
            // One 33ms game tick draws the dot into the working buffer.
            runtime.tick(at(40));
        }
        assert_eq!(output.frames, 2);
        // The test game dot is full red in the working buffer; the
        // driver sees the halved copy.
        assert_eq!(output.last[N / 2], Rgb::new(128, 0, 0));
    }

    #[test]
    fn test_status_published_once_for_a_static_scene() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut sink = RecordingSink::new();
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &config(10),
                ScriptedInput::idle(),
                CaptureOutput::<N>::new(),
                MemoryStore::new(0),
                &mut sink,
                channel.receiver(),
                1,
            );
            runtime.tick(at(0));
            runtime.tick(at(10));
            runtime.tick(at(20));
        }
        assert_eq!(sink.published, 1);
        assert_eq!(sink.last_name, "Test");
        assert_eq!(sink.states, vec![GameState::Playing]);
        assert_eq!(sink.last_score, 0);
    }

    #[test]
    fn test_latched_edge_reaches_the_next_game_tick() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let tap = RawInput {
            right: true,
            ..RawInput::default()
        };
        let mut output = CaptureOutput::<N>::new();
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &config(10),
                ScriptedInput::new(vec![RawInput::default(), RawInput::default(), tap]),
                &mut output,
                MemoryStore::new(0),
                NullStatusSink,
                channel.receiver(),
                1,
            );
            runtime.tick(at(0));
            // First 33ms game tick draws the dot at rest.
            runtime.tick(at(40));
            // The tap lands on a frame with no game tick pending and
            // must survive until the next one.
            runtime.tick(at(50));
            runtime.tick(at(80));
        }
        assert_eq!(output.frames, 4);
        assert_eq!(output.last[N / 2 + 1], colors::RED);
        // The old dot cell decayed exactly one fade step.
        assert_eq!(output.last[N / 2], Rgb::new(205, 0, 0));
    }

    #[test]
    fn test_trail_fades_once_per_game_tick() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let tap = RawInput {
            right: true,
            ..RawInput::default()
        };
        let mut output = CaptureOutput::<N>::new();
        {
            let mut runtime = Runtime::<_, _, _, _, N, 4>::new(
                &config(10),
                ScriptedInput::new(vec![RawInput::default(), RawInput::default(), tap]),
                &mut output,
                MemoryStore::new(0),
                NullStatusSink,
                channel.receiver(),
                1,
            );
            runtime.tick(at(0));
            // First game tick draws the dot, second moves it right and
            // leaves a one-step trail behind.
            runtime.tick(at(40));
            runtime.tick(at(80));
            // A frame that releases no tick must not touch the canvas.
            runtime.tick(at(90));
        }
        assert_eq!(output.frames, 4);
        assert_eq!(output.last[N / 2 + 1], colors::RED);
        // Still one fade step, not two: the zero-tick frame re-flushed
        // the buffer without decaying it.
        assert_eq!(output.last[N / 2], Rgb::new(205, 0, 0));
    }
}
