// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

pub trait Logger: Debug + Send + Sync {
    /**
        Submits the log record for logging.

        A record is one line from the sink's perspective: implementations must
        not interleave concurrently submitted records within a line.
    */
    fn finish_log_record(&self, record: LogRecord);

    /**
    The logger is about to be released.  Ensure all buffers are flushed and up
    to date.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Logger

Clone on Logger doesn't make sense; loggers hold unique resources.
PartialEq/Eq are skipped since it's unclear whether we'd mean data equality
or provenance.  Send/Sync are supertraits because records are submitted from
arbitrary threads.
*/
