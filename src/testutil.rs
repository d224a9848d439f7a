//! Fixtures shared by the unit tests.

use anyhow::Result;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub const BASIC_FILE: &str = "202511100MIA_box-CLE-ot1-basic_2025-11-28.csv";
pub const ADVANCED_FILE: &str = "202511050MIN_box-DEN-game-advanced_2025-11-28.csv";

/// Four player records: two starters, one reserve, one DNP reserve.
pub const BASIC_CSV: &str = "\
Unnamed: 0_level_0,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats,Basic Box Score Stats
Starters,MP,FG,FGA,FG%,3P,3PA,3P%,FT,FTA,FT%,ORB,DRB,TRB,AST,STL,BLK,TOV,PF,PTS,GmSc,+/-
Donovan Mitchell,36:12,10,21,.476,4,9,.444,6,6,1.000,0,5,5,6,2,0,3,2,30,22.1,+8
Evan Mobley,8:50,3,5,.600,0,1,.000,2,2,1.000,1,3,4,1,0,2,1,3,8,6.3,-2
Reserves,MP,FG,FGA,FG%,3P,3PA,3P%,FT,FTA,FT%,ORB,DRB,TRB,AST,STL,BLK,TOV,PF,PTS,GmSc,+/-
Ty Jerome,20:01,5,9,.556,2,4,.500,0,0,,0,2,2,4,1,0,1,1,12,9.8,+5
Craig Porter Jr.,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play,Did Not Play
Team Totals,265,41,88,.466,14,37,.378,15,18,.833,9,35,44,25,8,5,12,19,111,,
";

/// Three player records: two starters, one reserve.
pub const ADVANCED_CSV: &str = "\
Unnamed: 0_level_0,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats,Advanced Box Score Stats
Starters,MP,TS%,eFG%,3PAr,FTr,ORB%,DRB%,TRB%,AST%,STL%,BLK%,TOV%,USG%,ORtg,DRtg,BPM
Anthony Edwards,38:41,.612,.580,.448,.310,2.9,14.1,8.6,22.5,1.3,0.0,9.8,31.2,121,112,6.4
Rudy Gobert,33:02,.701,.667,.000,.556,12.4,25.0,18.9,5.1,1.5,4.2,11.0,14.3,128,105,3.1
Reserves,MP,TS%,eFG%,3PAr,FTr,ORB%,DRB%,TRB%,AST%,STL%,BLK%,TOV%,USG%,ORtg,DRtg,BPM
Naz Reid,24:15,.540,.520,.600,.100,3.1,18.2,10.6,12.0,2.0,1.9,8.3,,109,110,-0.8
Team Totals,240,.590,.561,.420,.280,,,,,,,,100.0,117,111,
";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,boxload=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// In-memory log sink for asserting on emitted lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Run `f` with this capture as the thread's subscriber.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let sink = self.clone();
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::new("info"))
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
