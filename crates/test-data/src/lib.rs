/// A tube configuration together with the buffer sizes a build must produce.
pub struct TestTube {
    pub ring_count: i64,
    pub cube_size: f32,
    pub vertex_count: usize,
    pub index_count: usize,
}

pub const EMPTY_TUBE: TestTube = TestTube {
    ring_count: 0,
    cube_size: 1.0,
    vertex_count: 0,
    index_count: 0,
};

pub const SINGLE_RING: TestTube = TestTube {
    ring_count: 1,
    cube_size: 1.0,
    vertex_count: 4,
    index_count: 12,
};

pub const TWO_RINGS: TestTube = TestTube {
    ring_count: 2,
    cube_size: 1.0,
    vertex_count: 8,
    index_count: 36,
};

pub const THREE_WIDE_RINGS: TestTube = TestTube {
    ring_count: 3,
    cube_size: 2.0,
    vertex_count: 12,
    index_count: 60,
};

pub const ALL_TUBES: [TestTube; 4] = [EMPTY_TUBE, SINGLE_RING, TWO_RINGS, THREE_WIDE_RINGS];
