//! Builders for test programs and images.

/// Flattens instruction words into little-endian program bytes.
pub fn program_bytes(instructions: &[u32]) -> Vec<u8> {
    instructions.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// ELF machine number for RISC-V.
pub const EM_RISCV: u16 = 243;
/// ELF machine number for x86-64.
pub const EM_X86_64: u16 = 62;

const EHDR_SIZE: u16 = 52;
const PHDR_SIZE: u16 = 32;
const PT_LOAD: u32 = 1;
const PF_RWX: u32 = 0x7;

/// One loadable segment of an [`ElfBuilder`] image.
pub struct Segment {
    pub vaddr: u32,
    pub data: Vec<u8>,
    pub mem_size: u32,
}

/// Builds minimal ELF32 little-endian executables with program headers only.
pub struct ElfBuilder {
    machine: u16,
    entry: u32,
    segments: Vec<Segment>,
}

impl ElfBuilder {
    pub fn new(entry: u32) -> Self {
        Self {
            machine: EM_RISCV,
            entry,
            segments: Vec::new(),
        }
    }

    pub fn machine(mut self, machine: u16) -> Self {
        self.machine = machine;
        self
    }

    /// Adds a segment whose in-memory size equals its file size.
    pub fn segment(self, vaddr: u32, data: Vec<u8>) -> Self {
        let mem_size = data.len() as u32;
        self.segment_with_bss(vaddr, data, mem_size)
    }

    /// Adds a segment that is `mem_size` bytes in memory, zero-filled past `data`.
    pub fn segment_with_bss(mut self, vaddr: u32, data: Vec<u8>, mem_size: u32) -> Self {
        self.segments.push(Segment {
            vaddr,
            data,
            mem_size,
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        let phnum = self.segments.len() as u16;
        let data_start = u32::from(EHDR_SIZE) + u32::from(PHDR_SIZE) * u32::from(phnum);

        let mut out = Vec::new();
        // e_ident: magic, ELFCLASS32, ELFDATA2LSB, EV_CURRENT, padding.
        out.extend_from_slice(&[0x7F, b'E', b'L', b'F', 1, 1, 1, 0]);
        out.extend_from_slice(&[0; 8]);
        out.extend_from_slice(&2u16.to_le_bytes()); // e_type = ET_EXEC
        out.extend_from_slice(&self.machine.to_le_bytes());
        out.extend_from_slice(&1u32.to_le_bytes()); // e_version
        out.extend_from_slice(&self.entry.to_le_bytes());
        out.extend_from_slice(&u32::from(EHDR_SIZE).to_le_bytes()); // e_phoff
        out.extend_from_slice(&0u32.to_le_bytes()); // e_shoff
        out.extend_from_slice(&0u32.to_le_bytes()); // e_flags
        out.extend_from_slice(&EHDR_SIZE.to_le_bytes());
        out.extend_from_slice(&PHDR_SIZE.to_le_bytes());
        out.extend_from_slice(&phnum.to_le_bytes());
        out.extend_from_slice(&40u16.to_le_bytes()); // e_shentsize
        out.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
        out.extend_from_slice(&0u16.to_le_bytes()); // e_shstrndx

        let mut offset = data_start;
        for seg in &self.segments {
            for field in [
                PT_LOAD,
                offset,
                seg.vaddr,
                seg.vaddr,
                seg.data.len() as u32,
                seg.mem_size,
                PF_RWX,
                4,
            ] {
                out.extend_from_slice(&field.to_le_bytes());
            }
            offset += seg.data.len() as u32;
        }

        for seg in self.segments {
            out.extend(seg.data);
        }
        out
    }
}
