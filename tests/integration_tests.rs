use fitstats::{import_packets, summarize_batch, BatchEntry, FitStatsError, SensorPacket, Sport};

/// Integration tests covering the packet-to-summary pipeline

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SWIMMING_MESSAGE: &str = "Workout type: Swimming; Duration: 1.000 h; \
         Distance: 0.994 km; Avg speed: 1.000; Calories burned: 336.000.";
    const RUNNING_MESSAGE: &str = "Workout type: Running; Duration: 1.000 h; \
         Distance: 9.750 km; Avg speed: 9.750; Calories burned: 797.805.";
    const WALKING_MESSAGE: &str = "Workout type: Walking; Duration: 1.000 h; \
         Distance: 5.850 km; Avg speed: 5.850; Calories burned: 349.252.";

    fn sample_packets() -> Vec<SensorPacket> {
        vec![
            SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    /// Render every entry, panicking on a rejection; for batches that
    /// are expected to be clean
    fn summary_messages(packets: &[SensorPacket]) -> Vec<String> {
        summarize_batch(packets, false)
            .into_iter()
            .map(|entry| match entry {
                BatchEntry::Summarized(summary) => summary.to_string(),
                BatchEntry::Rejected { code, error, .. } => {
                    panic!("packet {:?} rejected: {}", code, error)
                }
            })
            .collect()
    }

    /// The firmware sample packets produce the reference messages, in order
    #[test]
    fn test_sample_packets_end_to_end() {
        assert_eq!(
            summary_messages(&sample_packets()),
            vec![SWIMMING_MESSAGE, RUNNING_MESSAGE, WALKING_MESSAGE]
        );
    }

    #[test]
    fn test_summaries_preserve_input_order() {
        let mut packets = sample_packets();
        packets.reverse();

        let sports: Vec<Sport> = packets
            .iter()
            .map(|packet| packet.decode().unwrap().sport())
            .collect();
        assert_eq!(sports, vec![Sport::Walking, Sport::Running, Sport::Swimming]);
    }

    #[test]
    fn test_unknown_code_reports_unknown_workout_type() {
        let packet = SensorPacket::new("BIKE", vec![5000.0, 1.0, 75.0]);
        let err = packet.decode().unwrap_err();
        match err {
            FitStatsError::UnknownWorkoutType { code } => assert_eq!(code, "BIKE"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    fn batch_with_bad_middle_packet() -> Vec<SensorPacket> {
        vec![
            SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPacket::new("RUN", vec![15000.0, 0.0, 75.0]),
            SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    /// One bad packet never poisons its neighbors in hardened mode
    #[test]
    fn test_bad_packet_is_isolated_from_the_batch() {
        let entries = summarize_batch(&batch_with_bad_middle_packet(), false);
        assert_eq!(entries.len(), 3);

        match &entries[0] {
            BatchEntry::Summarized(summary) => assert_eq!(summary.to_string(), RUNNING_MESSAGE),
            other => panic!("unexpected entry: {:?}", other),
        }
        match &entries[1] {
            BatchEntry::Rejected { index, error, .. } => {
                assert_eq!(*index, 1);
                assert!(matches!(error, FitStatsError::InvalidInput { .. }));
            }
            other => panic!("unexpected entry: {:?}", other),
        }
        match &entries[2] {
            BatchEntry::Summarized(summary) => assert_eq!(summary.to_string(), WALKING_MESSAGE),
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    /// Strict mode stops at the first bad packet and reports nothing after it
    #[test]
    fn test_strict_mode_aborts_at_first_bad_packet() {
        let entries = summarize_batch(&batch_with_bad_middle_packet(), true);
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], BatchEntry::Summarized(_)));
        assert!(matches!(entries[1], BatchEntry::Rejected { index: 1, .. }));
    }

    #[test]
    fn test_csv_file_to_summaries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workouts.csv");
        fs::write(
            &path,
            "SWM,720,1,80,25,40\nRUN,15000,1,75\nWLK,9000,1,75,180\n",
        )
        .unwrap();

        let packets = import_packets(&path).unwrap();
        assert_eq!(
            summary_messages(&packets),
            vec![SWIMMING_MESSAGE, RUNNING_MESSAGE, WALKING_MESSAGE]
        );
    }

    #[test]
    fn test_json_file_to_summaries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("workouts.json");
        fs::write(
            &path,
            r#"[["RUN", [15000, 1, 75]], ["SWM", [720, 1, 80, 25, 40]]]"#,
        )
        .unwrap();

        let packets = import_packets(&path).unwrap();
        let messages = summary_messages(&packets);
        assert_eq!(messages[0], RUNNING_MESSAGE);
        assert_eq!(messages[1], SWIMMING_MESSAGE);
    }

    #[test]
    fn test_user_messages_name_the_failure() {
        let unknown = SensorPacket::new("YOGA", vec![1.0, 1.0, 1.0])
            .decode()
            .unwrap_err();
        assert!(unknown.user_message().contains("YOGA"));
        assert!(unknown.user_message().contains("RUN, WLK or SWM"));

        let invalid = SensorPacket::new("RUN", vec![15000.0, -1.0, 75.0])
            .decode()
            .unwrap_err();
        assert!(invalid.user_message().contains("Running"));
    }

    /// Wrong arity on a known code is an input error, not an unknown code
    #[test]
    fn test_known_code_with_wrong_arity() {
        let err = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0])
            .decode()
            .unwrap_err();
        match err {
            FitStatsError::InvalidInput { sport, reason } => {
                assert_eq!(sport, Sport::Swimming);
                assert!(reason.contains("expected 5 values, got 3"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
