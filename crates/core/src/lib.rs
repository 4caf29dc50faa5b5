pub mod formatting {
    pub mod display;
}

pub mod pipeline {
    pub mod playback_logger;
    pub mod track_playback_use_case;
}

pub mod playback {
    pub mod domain {
        pub mod playback_clock;
        pub mod region_locator;
        pub mod segment_plan;
        pub mod tick_timer;
    }
    pub mod infrastructure {
        pub mod manual_clock;
        pub mod threaded_tick_timer;
    }
}

pub mod regions {
    pub mod domain {
        pub mod crop_rect;
        pub mod geometry;
        pub mod id_generator;
        pub mod region_factory;
    }
    pub mod infrastructure {
        pub mod uuid_id_generator;
    }
}

pub mod shared {
    pub mod constants;
    pub mod file_filter;
    pub mod region;
}
