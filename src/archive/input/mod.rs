use crate::archive::{
	ArchiveError, Field, FieldAs, Fields, Issue, IssueKind, LoadOptions, NodeKind, Nvp, Policy, RecordDef, Result, Shape, TreeRead, bind,
};

/// Issues tolerated during a successful input conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
	/// Conditions handled under a `Skip` policy, in walk order.
	pub skipped: Vec<Issue>,
}

impl LoadReport {
	/// Return whether every registered field was applied.
	pub fn is_clean(&self) -> bool {
		self.skipped.is_empty()
	}
}

/// Per-conversion input state: policies, current key path, depth, and issues.
#[derive(Debug)]
pub struct LoadCtx {
	options: LoadOptions,
	path: String,
	marks: Vec<usize>,
	depth: u32,
	skipped: Vec<Issue>,
	rejected: Vec<Issue>,
}

impl LoadCtx {
	pub(crate) fn new(options: &LoadOptions) -> Self {
		Self {
			options: options.clone(),
			path: String::new(),
			marks: Vec::new(),
			depth: 0,
			skipped: Vec::new(),
			rejected: Vec::new(),
		}
	}

	/// Options this conversion runs under.
	pub fn options(&self) -> &LoadOptions {
		&self.options
	}

	/// Dotted path of the field currently being converted.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Report a node whose kind does not fit `expected`.
	pub fn mismatch(&mut self, expected: Shape, found: NodeKind) {
		self.record(IssueKind::ShapeMismatch { expected, found }, self.options.on_mismatch);
	}

	/// Report a numeric node that does not fit `expected`.
	pub fn out_of_range(&mut self, expected: Shape) {
		self.record(IssueKind::OutOfRange { expected }, self.options.on_mismatch);
	}

	pub(crate) fn missing(&mut self) {
		self.record(IssueKind::MissingKey, self.options.on_missing);
	}

	pub(crate) fn enter_key(&mut self, key: &str) {
		self.marks.push(self.path.len());
		if !self.path.is_empty() {
			self.path.push('.');
		}
		self.path.push_str(key);
	}

	pub(crate) fn enter_index(&mut self, index: usize) {
		self.marks.push(self.path.len());
		self.path.push('[');
		self.path.push_str(&index.to_string());
		self.path.push(']');
	}

	pub(crate) fn leave(&mut self) {
		if let Some(mark) = self.marks.pop() {
			self.path.truncate(mark);
		}
	}

	fn descend(&mut self) -> bool {
		if self.depth >= self.options.max_depth {
			let max_depth = self.options.max_depth;
			self.record(IssueKind::DepthExceeded { max_depth }, Policy::Error);
			return false;
		}
		self.depth += 1;
		true
	}

	fn ascend(&mut self) {
		self.depth = self.depth.saturating_sub(1);
	}

	fn record(&mut self, kind: IssueKind, policy: Policy) {
		let path = if self.path.is_empty() { "<root>".to_owned() } else { self.path.clone() };
		let issue = Issue { path, kind };
		match policy {
			Policy::Skip => {
				log::debug!("skipped {issue}");
				self.skipped.push(issue);
			}
			Policy::Error => {
				log::debug!("rejected {issue}");
				self.rejected.push(issue);
			}
		}
	}

	pub(crate) fn finish(self) -> Result<LoadReport> {
		log::trace!("load finished: skipped={}, rejected={}", self.skipped.len(), self.rejected.len());
		if !self.rejected.is_empty() {
			return Err(ArchiveError::Rejected { issues: self.rejected });
		}
		Ok(LoadReport { skipped: self.skipped })
	}
}

/// Input archive over one object node, populating one record.
pub struct InputArchive<'a, R, N> {
	record: &'a mut R,
	node: &'a N,
	cx: &'a mut LoadCtx,
}

impl<R, N: TreeRead> Fields<R> for InputArchive<'_, R, N> {
	fn bind<T: Field>(&mut self, key: &str, _get: impl Fn(&R) -> &T, get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self {
		let nvp = bind(key, get_mut(&mut *self.record));
		load_member(self.node, self.cx, nvp, |value, node, cx| value.load(node, cx));
		self
	}

	fn bind_with<D: FieldAs<T>, T>(&mut self, key: &str, _get: impl Fn(&R) -> &T, get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self {
		let nvp = bind(key, get_mut(&mut *self.record));
		load_member(self.node, self.cx, nvp, |value, node, cx| <D as FieldAs<T>>::load(value, node, cx));
		self
	}
}

fn load_member<T, N: TreeRead>(object: &N, cx: &mut LoadCtx, mut nvp: Nvp<'_, &mut T>, load: impl FnOnce(&mut T, &N, &mut LoadCtx) -> bool) {
	cx.enter_key(nvp.name());
	match object.member(nvp.name()) {
		None => cx.missing(),
		Some(node) if node.kind() == NodeKind::Null => {}
		Some(node) => {
			load(nvp.value(), node, cx);
		}
	}
	cx.leave();
}

/// Populate `record` from an object node through definition `D`.
///
/// Returns `false` without touching the record when `node` is not an object.
pub(crate) fn load_record<D: RecordDef<T>, T, N: TreeRead>(record: &mut T, node: &N, cx: &mut LoadCtx) -> bool {
	if node.kind() != NodeKind::Object {
		cx.mismatch(<D as RecordDef<T>>::shape(), node.kind());
		return false;
	}
	if !cx.descend() {
		return false;
	}

	let mut archive = InputArchive { record, node, cx };
	D::register(&mut archive);
	archive.cx.ascend();
	true
}

/// Populate `record` from a root object node through definition `D`.
pub fn load_with<D: RecordDef<T>, T, N: TreeRead>(record: &mut T, node: &N, options: &LoadOptions) -> Result<LoadReport> {
	let kind = node.kind();
	if kind != NodeKind::Object {
		return Err(ArchiveError::NotAnObject { kind });
	}

	let mut cx = LoadCtx::new(options);
	load_record::<D, T, N>(record, node, &mut cx);
	cx.finish()
}
